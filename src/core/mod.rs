pub mod cart;
pub mod dedupe;
pub mod offer_key;
pub mod price;
pub mod session;

pub use crate::domain::model::{CartLineItem, Offer, PriceQuote, SearchRequest};
pub use crate::domain::ports::{ConfigProvider, PricingService};
pub use crate::utils::error::Result;
