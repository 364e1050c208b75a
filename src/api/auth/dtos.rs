use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login body. The two shapes share one endpoint; the presence of the
/// `encData` key decides the variant before any credential handling happens
/// (see `service::parse_login_request`).
#[derive(Debug, ToSchema)]
pub(crate) enum LoginRequest {
    Encrypted(EncryptedLogin),
    Plain(PlainLogin),
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct EncryptedLogin {
    /// `base64(iv) " " base64(ciphertext||tag)` envelope over the plain
    /// credentials JSON.
    #[serde(rename = "encData")]
    pub enc_data: String,
}

// Fields default to empty rather than failing deserialization: a missing
// email is reported as a credential mismatch, not a parse error.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub(crate) struct PlainLogin {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub(crate) struct LoginResponse {
    pub message: String,
    pub access_token: String,
}

#[derive(Serialize, ToSchema)]
pub(crate) struct MessageResponse {
    pub message: String,
}
