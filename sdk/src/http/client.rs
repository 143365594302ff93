use crate::error::{DiskPerfError, ErrorResponse};
use crate::http::config::HttpClientConfig;
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::trace;

const ACCESS_KEY_PARAM: &str = "code";

#[derive(Debug)]
pub struct HttpClient {
    pub api_url: Url,
    access_key: Option<String>,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(api_url: &str) -> Result<Self, DiskPerfError> {
        Self::create(HttpClientConfig {
            api_url: api_url.to_string(),
            ..Default::default()
        })
    }

    pub fn create(config: HttpClientConfig) -> Result<Self, DiskPerfError> {
        // A trailing slash keeps the last segment of the base URL (e.g. `/api`) on join.
        let base_url = format!("{}/", config.api_url.trim_end_matches('/'));
        let api_url =
            Url::parse(&base_url).map_err(|_| DiskPerfError::CannotParseUrl(config.api_url))?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        let access_key = config.access_key.filter(|key| !key.is_empty());

        Ok(Self {
            api_url,
            access_key,
            client,
        })
    }

    pub async fn get(&self, path: &str) -> Result<Response, DiskPerfError> {
        self.get_with_query(path, &[]).await
    }

    pub async fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Response, DiskPerfError> {
        let url = self.get_url(path)?;
        let mut request = self.client.get(url).query(query);
        if let Some(access_key) = &self.access_key {
            request = request.query(&[(ACCESS_KEY_PARAM, access_key)]);
        }

        trace!("Sending GET request to: {path}");
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    pub fn get_url(&self, path: &str) -> Result<Url, DiskPerfError> {
        self.api_url
            .join(path.trim_start_matches('/'))
            .map_err(|_| DiskPerfError::CannotParseUrl(path.to_string()))
    }

    async fn handle_response(response: Response) -> Result<Response, DiskPerfError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let reason = serde_json::from_str::<ErrorResponse>(&body)
            .map(|error| error.reason)
            .unwrap_or(body);
        let status = status.as_u16();
        if status >= 500 {
            Err(DiskPerfError::ServerFailure { status, reason })
        } else {
            Err(DiskPerfError::RequestRejected { status, reason })
        }
    }
}

/// Deserializes a JSON body matching object keys case-insensitively.
pub(crate) fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, DiskPerfError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|error| DiskPerfError::InvalidResponse(error.to_string()))?;
    serde_json::from_value(lowercase_keys(value))
        .map_err(|error| DiskPerfError::InvalidResponse(error.to_string()))
}

fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(object) => Value::Object(
            object
                .into_iter()
                .map(|(key, value)| (key.to_lowercase(), lowercase_keys(value)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        value => value,
    }
}
