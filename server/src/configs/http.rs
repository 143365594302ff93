use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HttpConfig {
    pub address: String,
    /// Expected value of the `code` query parameter. Empty disables the check.
    pub access_key: String,
}
