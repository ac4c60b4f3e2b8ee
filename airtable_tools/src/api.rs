use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client,
    Method,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::{config::AirtableConfig, data_objects::AirtableRecord, AirtableApiError};

#[derive(Clone)]
pub struct AirtableApi {
    config: AirtableConfig,
    client: Arc<Client>,
}

impl AirtableApi {
    pub fn new(config: AirtableConfig) -> Result<Self, AirtableApiError> {
        let mut headers = HeaderMap::with_capacity(2);
        let bearer = format!("Bearer {}", config.api_key.reveal());
        let val = HeaderValue::from_str(&bearer).map_err(|e| AirtableApiError::Initialization(e.to_string()))?;
        headers.insert(AUTHORIZATION, val);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AirtableApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub async fn rest_query<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<T, AirtableApiError> {
        let url = self.url(path);
        trace!("🗂️ Sending REST query: {url}");
        let mut req = self.client.request(method, url);
        if let Some(body) = body {
            req = req.json(&body);
        }
        let response = req.send().await.map_err(|e| AirtableApiError::RestResponseError(e.to_string()))?;
        if response.status().is_success() {
            trace!("🗂️ REST query successful. {}", response.status());
            response.json::<T>().await.map_err(|e| AirtableApiError::JsonError(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| AirtableApiError::RestResponseError(e.to_string()))?;
            Err(AirtableApiError::QueryError { status, message })
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("https://api.airtable.com/{}/{}{path}", self.config.api_version, self.config.base_id)
    }

    /// Create a single record in `table` and return the record the store assigned.
    ///
    /// `table` may be a table name ("Line Items") or a table id ("tblXXX..."). The call is made
    /// exactly once; a non-success response surfaces as [`AirtableApiError::QueryError`] carrying
    /// the store's error payload verbatim.
    pub async fn create_record(
        &self,
        table: &str,
        fields: &Map<String, Value>,
    ) -> Result<AirtableRecord, AirtableApiError> {
        let path = format!("/{table}");
        let body = serde_json::json!({ "fields": fields });
        debug!("🗂️ Creating record in table '{table}'");
        let record = self.rest_query::<AirtableRecord, Value>(Method::POST, &path, Some(body)).await?;
        info!("🗂️ Created record {} in table '{table}'", record.id);
        Ok(record)
    }
}
