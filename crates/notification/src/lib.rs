pub mod contact;
mod error;
mod service;

pub use contact::ContactNotifier;
pub use error::*;
pub use service::*;
