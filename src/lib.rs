pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use self::config::CliConfig;
pub use self::config::TomlConfig;

pub use self::adapters::http::HttpPricingService;
pub use self::core::{cart::CartStore, dedupe::dedupe, session::CompareSession};
pub use self::domain::model::{CartLineItem, Offer, OutputFormat};
pub use self::utils::error::{CompareError, Result};
