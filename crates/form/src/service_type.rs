use strum::{Display, EnumString, VariantArray};

/// Services offered in the general contact dialog.
///
/// `Display` is the wire value; [`ServiceType::label`] is the option text.
#[derive(EnumString, Display, VariantArray, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceType {
    #[default]
    #[strum(serialize = "Co-living")]
    CoLiving,
    #[strum(serialize = "Long-term Rentals")]
    LongTermRentals,
    #[strum(serialize = "Short-term Rentals")]
    ShortTermRentals,
    #[strum(serialize = "PG near Eon IT Park")]
    PgNearEonItPark,
    #[strum(serialize = "Single Room PG")]
    SingleRoomPg,
}

impl ServiceType {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::CoLiving => "Co-living Spaces",
            ServiceType::LongTermRentals => "Long-term Rentals",
            ServiceType::ShortTermRentals => "Short-term Rentals",
            ServiceType::PgNearEonItPark => "PG near Eon IT Park",
            ServiceType::SingleRoomPg => "Single Room PG",
        }
    }
}
