//! Production catalog client over blocking HTTP with JSON bodies.
//!
//! Transport failures and non-success statuses are folded into the
//! [`CatalogError`] taxonomy here, so callers never see an HTTP status code.

use std::time::Duration;

use log::debug;
use reqwest::blocking::{Client, Response};

use super::{CatalogClient, DeleteReceipt, ListQuery};
use crate::config::InventoryConfig;
use crate::error::{CatalogError, Result};
use crate::model::{Product, ProductDraft};

pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &InventoryConfig) -> Result<Self> {
        Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
        response
            .json::<T>()
            .map_err(|e| CatalogError::Unknown(format!("malformed response body: {e}")))
    }
}

fn transport(err: reqwest::Error) -> CatalogError {
    CatalogError::Network(err.to_string())
}

/// Checks the response status, consuming the body on failure to surface the
/// remote's error message.
fn check(response: Response, id: Option<&str>) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(error_for_status(status.as_u16(), &body, id))
}

/// Maps a non-success status to the error taxonomy. The remote sends
/// `{"message": "..."}` bodies on failure; the message is surfaced when
/// present.
fn error_for_status(status: u16, body: &str, id: Option<&str>) -> CatalogError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "request rejected".to_string()
            } else {
                trimmed.to_string()
            }
        });

    match status {
        404 => CatalogError::NotFound(id.unwrap_or("unknown").to_string()),
        400 | 422 => CatalogError::Validation(message),
        _ => CatalogError::Unknown(format!("HTTP {status}: {message}")),
    }
}

impl CatalogClient for HttpCatalog {
    fn list_products(&self, query: &ListQuery) -> Result<Vec<Product>> {
        let mut params = vec![
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
        ];
        if let Some(term) = query.search.as_deref().filter(|t| !t.is_empty()) {
            params.push(("search", term.to_string()));
        }
        debug!("GET /products page={} limit={}", query.page, query.limit);

        let response = self
            .client
            .get(self.url("/products"))
            .query(&params)
            .send()
            .map_err(transport)?;
        Self::decode(check(response, None)?)
    }

    fn get_product(&self, id: &str) -> Result<Product> {
        let response = self
            .client
            .get(self.url(&format!("/products/{id}")))
            .send()
            .map_err(transport)?;
        Self::decode(check(response, Some(id))?)
    }

    fn create_product(&mut self, draft: &ProductDraft) -> Result<Product> {
        debug!("POST /products name={:?}", draft.name);
        let response = self
            .client
            .post(self.url("/products"))
            .json(draft)
            .send()
            .map_err(transport)?;
        Self::decode(check(response, None)?)
    }

    fn update_product(&mut self, id: &str, draft: &ProductDraft) -> Result<Product> {
        debug!("PUT /products/{id}");
        let response = self
            .client
            .put(self.url(&format!("/products/{id}")))
            .json(draft)
            .send()
            .map_err(transport)?;
        Self::decode(check(response, Some(id))?)
    }

    fn delete_product(&mut self, id: &str) -> Result<DeleteReceipt> {
        debug!("DELETE /products/{id}");
        let response = self
            .client
            .delete(self.url(&format!("/products/{id}")))
            .send()
            .map_err(transport)?;
        Self::decode(check(response, Some(id))?)
    }
}
