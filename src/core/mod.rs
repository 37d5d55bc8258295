pub mod greeter;
pub mod smoke;
pub mod transform;

pub use crate::domain::model::User;
pub use crate::utils::error::Result;
