use cohousy_contact::ContactPayload;

use crate::{FormDialog, FormFields, dialog::missing_contact_fields};

pub const PROPERTY_MANAGEMENT_SERVICE: &str = "Property Management";

/// Owner-side quote request. Travels through the same endpoint as a
/// regular inquiry, with the property details folded into `message`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyManagementRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub property_type: String,
    pub furnishing: String,
    pub occupancy_status: String,
    pub expected_rent: String,
    pub notes: String,
}

impl PropertyManagementRequest {
    pub fn message(&self) -> String {
        let notes = if self.notes.is_empty() {
            "None"
        } else {
            &self.notes
        };

        format!(
            "Property Management Request:\n\
             \n\
             Property Details:\n\
             - City: {}\n\
             - Property Type: {}\n\
             - Furnishing: {}\n\
             - Occupancy Status: {}\n\
             - Expected Rent: ₹{}\n\
             \n\
             Additional Notes:\n\
             {}",
            self.city,
            self.property_type,
            self.furnishing,
            self.occupancy_status,
            self.expected_rent,
            notes
        )
    }
}

impl FormFields for PropertyManagementRequest {
    fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: Some(self.name.to_owned()),
            email: Some(self.email.to_owned()),
            phone: Some(self.phone.to_owned()),
            message: Some(self.message()),
            service_type: Some(PROPERTY_MANAGEMENT_SERVICE.to_owned()),
            preferred_date: None,
            property_name: None,
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = missing_contact_fields(self.payload());

        let details = [
            ("city", &self.city),
            ("propertyType", &self.property_type),
            ("furnishing", &self.furnishing),
            ("occupancyStatus", &self.occupancy_status),
            ("expectedRent", &self.expected_rent),
        ];
        missing.extend(
            details
                .into_iter()
                .filter(|(_, value)| value.is_empty())
                .map(|(field, _)| field),
        );

        missing
    }
}

pub type PropertyManagementForm = FormDialog<PropertyManagementRequest>;

impl FormDialog<PropertyManagementRequest> {
    pub fn property_management() -> Self {
        Self::new(PropertyManagementRequest::default())
    }
}
