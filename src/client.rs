use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::data_models::{AnswerRequest, AnswerResponse, SearchRequest, SearchResponse};
use crate::error::ValyuError;

pub mod endpoints {
    pub const SEARCH: &str = "search";
    pub const ANSWER: &str = "answer";
}

/// Thin wrapper over the hosted search/answer API.
#[derive(Debug, Clone)]
pub struct ValyuClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl ValyuClient {
    pub fn new(config: &Config) -> ValyuClient {
        ValyuClient {
            http: reqwest::Client::new(),
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ValyuError> {
        self.post(endpoints::SEARCH, request).await
    }

    pub async fn answer(&self, request: &AnswerRequest) -> Result<AnswerResponse, ValyuError> {
        self.post(endpoints::ANSWER, request).await
    }

    async fn post<B, R>(&self, endpoint: &str, body: &B) -> Result<R, ValyuError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.api_base, endpoint);
        tracing::debug!("POST {url}");

        let res = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await?;
            tracing::debug!("{endpoint} returned {status}");
            return Err(ValyuError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = res.bytes().await?;
        tracing::debug!("{endpoint} returned {status}, {} bytes", bytes.len());
        Ok(serde_json::from_slice(&bytes)?)
    }
}
