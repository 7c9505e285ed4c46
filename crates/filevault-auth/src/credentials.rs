//! Parsing of client credentials from request headers.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use filevault_core::error::AppError;
use filevault_core::result::AppResult;

/// Header carrying the session token.
pub const X_TOKEN_HEADER: &str = "X-Token";

/// Email and password presented with HTTP Basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("email", &self.email)
            .field("password", &"****")
            .finish()
    }
}

/// Parses an `Authorization: Basic <base64(email:password)>` header value.
///
/// The decoded text is split at the first `:`, so passwords may contain
/// colons. Anything malformed, or an empty email or password, is
/// `Unauthorized`.
pub fn parse_basic(header: &str) -> AppResult<BasicCredentials> {
    let (scheme, encoded) = header
        .trim()
        .split_once(' ')
        .ok_or_else(AppError::unauthorized)?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(AppError::unauthorized());
    }

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| AppError::unauthorized())?;
    let text = String::from_utf8(decoded).map_err(|_| AppError::unauthorized())?;

    let (email, password) = text.split_once(':').ok_or_else(AppError::unauthorized)?;
    if email.is_empty() || password.is_empty() {
        return Err(AppError::unauthorized());
    }

    Ok(BasicCredentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}
