use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub api_url: String,
    /// Credential sent as the `code` query parameter, if any.
    pub access_key: Option<String>,
    /// Overall timeout of a single request, including the server-side write.
    pub timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> HttpClientConfig {
        HttpClientConfig {
            api_url: "http://127.0.0.1:3000".to_string(),
            access_key: None,
            timeout: Duration::from_secs(600),
        }
    }
}
