//! Fetching pages from list endpoints

use std::rc::Rc;

use async_trait::async_trait;
use contracts::shared::pagination::{ListError, ListRequest, ListResponse};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::api_utils::api_url;

/// List endpoint plus its fixed query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSource {
    pub url: String,
    pub params: Vec<(String, String)>,
}

impl ListSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Full request URL: source parameters first, then paging parameters
    pub fn request_url(&self, base: &str, request: &ListRequest) -> Result<String, FetchError> {
        let paging = serde_qs::to_string(request)
            .map_err(|e| FetchError::Transport(format!("Failed to encode query: {}", e)))?;
        let mut query: Vec<String> = self
            .params
            .iter()
            .map(|(name, value)| {
                format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
            })
            .collect();
        query.push(paging);
        let separator = if base.contains('?') { '&' } else { '?' };
        Ok(format!("{}{}{}", base, separator, query.join("&")))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Failed to send request: {0}")]
    Transport(String),

    #[error("Server responded with status {status}")]
    Status { status: u16, body: String },

    #[error("{}", .0.message)]
    Rejected(ListError),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Prefers the structured `{code, message}` body, keeps anything else for display
    pub fn from_failed_response(status: u16, body: String) -> Self {
        match serde_json::from_str::<ListError>(&body) {
            Ok(error) => FetchError::Rejected(error),
            Err(_) => FetchError::Status { status, body },
        }
    }
}

/// Performs one list request
#[async_trait(?Send)]
pub trait ListFetcher<T> {
    async fn list(
        &self,
        source: &ListSource,
        request: &ListRequest,
    ) -> Result<ListResponse<T>, FetchError>;
}

#[async_trait(?Send)]
impl<T, F> ListFetcher<T> for Rc<F>
where
    F: ListFetcher<T> + ?Sized,
{
    async fn list(
        &self,
        source: &ListSource,
        request: &ListRequest,
    ) -> Result<ListResponse<T>, FetchError> {
        (**self).list(source, request).await
    }
}

/// `GET` against the backend API with gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpListFetcher;

#[async_trait(?Send)]
impl<T> ListFetcher<T> for HttpListFetcher
where
    T: DeserializeOwned + 'static,
{
    async fn list(
        &self,
        source: &ListSource,
        request: &ListRequest,
    ) -> Result<ListResponse<T>, FetchError> {
        let url = source.request_url(&api_url(&source.url), request)?;

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::from_failed_response(status, body));
        }

        response
            .json::<ListResponse<T>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
