use serde::{Deserialize, Serialize};

/// Token endpoint reply for both the code and the refresh grant. Fields the
/// relay does not act on are kept optional and otherwise ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Durable form of the refresh credential. At most one record exists; `id`
/// is always the fixed store key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub id: String,
    pub refresh_token: String,
}
