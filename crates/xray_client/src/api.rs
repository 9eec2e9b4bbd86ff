use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use xray_common::api::{bones_url, parts_url};
use xray_common::{ApiError, Bone, Part, PartsApi};

/// [`PartsApi`] over the browser's `fetch`.
#[derive(Clone, Debug)]
pub struct HttpPartsApi {
    base_url: String,
}

impl HttpPartsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                url,
                status: response.status(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl PartsApi for HttpPartsApi {
    async fn parts(&self) -> Result<Vec<Part>, ApiError> {
        self.get_json(parts_url(&self.base_url)).await
    }

    async fn bones(&self, part_id: u64) -> Result<Vec<Bone>, ApiError> {
        self.get_json(bones_url(&self.base_url, part_id)).await
    }
}
