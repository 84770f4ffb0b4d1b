use gloo::net::http::Request;
use thiserror::Error;
use trivito_core::TriviaSource;
use trivito_protocol::{
    CategoryDetail, CategoryId, CategorySummary, categories_path, category_path,
    decode_categories, decode_category,
};

#[derive(Error, Debug)]
pub(crate) enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] gloo::net::Error),
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Trivia API reached through the browser's `fetch`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpSource {
    api_base: String,
}

impl HttpSource {
    pub(crate) fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    async fn get_text(&self, url: String) -> Result<String, FetchError> {
        log::debug!("GET {}", url);
        let response = Request::get(&url).send().await?;
        if !response.ok() {
            return Err(FetchError::Status {
                url,
                status: response.status(),
            });
        }
        Ok(response.text().await?)
    }
}

impl TriviaSource for HttpSource {
    type Error = FetchError;

    async fn fetch_categories(&self, count: u16) -> Result<Vec<CategorySummary>, FetchError> {
        let body = self.get_text(self.url(&categories_path(count))).await?;
        Ok(decode_categories(&body)?)
    }

    async fn fetch_category(&self, id: CategoryId) -> Result<CategoryDetail, FetchError> {
        let body = self.get_text(self.url(&category_path(id))).await?;
        Ok(decode_category(&body)?)
    }
}
