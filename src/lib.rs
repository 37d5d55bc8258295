pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{greeter::greet, smoke::SmokeCheck, transform::double};
pub use domain::model::User;
pub use utils::error::{Result, SmokeError};
