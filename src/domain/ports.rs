use crate::domain::model::{Offer, OutputFormat, SearchRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Source of offers for a part number.
#[async_trait]
pub trait PricingService: Send + Sync {
    async fn fetch_offers(&self, request: &SearchRequest) -> Result<Vec<Offer>>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn headers(&self) -> HashMap<String, String>;
    fn output_format(&self) -> OutputFormat;
}
