use crate::domain::model::{Offer, SearchRequest};
use crate::domain::ports::{ConfigProvider, PricingService};
use crate::utils::error::{CompareError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

/// Pricing service reached over HTTP: `POST <endpoint>` with the search
/// request as JSON, answered by a JSON array of offers.
#[derive(Debug, Clone)]
pub struct HttpPricingService {
    client: Client,
    endpoint: String,
    timeout: Duration,
    headers: HashMap<String, String>,
}

impl HttpPricingService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(30),
            headers: HashMap::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint().to_string(),
            timeout: config.timeout(),
            headers: config.headers(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PricingService for HttpPricingService {
    async fn fetch_offers(&self, search: &SearchRequest) -> Result<Vec<Offer>> {
        // 構建請求
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(search)
            .timeout(self.timeout);

        // 添加自定義標頭
        for (key, value) in &self.headers {
            request = request.header(key, value);
        }

        tracing::debug!("📡 Making pricing request to: {}", self.endpoint);

        let response = request
            .send()
            .await
            .map_err(|e| CompareError::search_failed(format!("request failed: {}", e)))?;
        tracing::debug!("📡 Pricing response status: {}", response.status());

        if !response.status().is_success() {
            return Err(CompareError::search_failed(format!(
                "pricing service returned status: {}",
                response.status()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CompareError::search_failed(format!("could not read response: {}", e)))?;

        // 回應必須是報價陣列
        let offers: Vec<Offer> = serde_json::from_slice(&body)
            .map_err(|e| CompareError::search_failed(format!("unusable payload: {}", e)))?;

        tracing::debug!("Received {} offers", offers.len());
        Ok(offers)
    }
}
