//! Contact form submissions: wire payload, typed submission and validation.

mod payload;
mod preferred_date;
mod submission;

pub use payload::*;
pub use preferred_date::*;
pub use submission::*;
