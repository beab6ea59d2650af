//! Client side of the contact flow: dialog state, payload building and the
//! HTTP submission to `/api/contact`.

mod dialog;
mod property_management;
mod service_type;
mod submitter;

pub use dialog::*;
pub use property_management::*;
pub use service_type::*;
pub use submitter::*;
