use base64::Engine as _;
use chrono::{DateTime, TimeDelta, Utc};

use crate::error::AuthError;

/// Seconds before expiry at which a token is already treated as expired.
pub const EXPIRY_BUFFER_SECS: i64 = 60;

/// Decode the JWT `exp` claim without verifying the signature.
///
/// The backend is the only party that validates tokens; this is used to
/// avoid sending a request that is certain to come back 401.
///
/// # Errors
///
/// Returns `AuthError::Other` if the token is not JWT-shaped or has no
/// usable `exp` claim.
pub fn decode_expiry(jwt: &str) -> Result<DateTime<Utc>, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::Other("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| AuthError::Other(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::Other(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::Other("missing exp claim".into()))?;
    DateTime::from_timestamp(exp, 0).ok_or_else(|| AuthError::Other("invalid exp timestamp".into()))
}

/// Whether the token is known to be expired (or within the buffer of it).
///
/// Opaque tokens whose expiry cannot be decoded are never reported expired.
#[must_use]
pub fn is_expired(jwt: &str) -> bool {
    decode_expiry(jwt).is_ok_and(|exp| exp <= Utc::now() + TimeDelta::seconds(EXPIRY_BUFFER_SECS))
}

#[cfg(test)]
pub(crate) fn make_jwt_with_exp(exp: i64) -> String {
    let header = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .encode(format!(r#"{{"id":"u-1","exp":{exp}}}"#));
    let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode("fake_sig");
    format!("{header}.{payload}.{signature}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_future_expiry() {
        let future = Utc::now().timestamp() + 3600;
        let jwt = make_jwt_with_exp(future);
        assert_eq!(decode_expiry(&jwt).unwrap().timestamp(), future);
        assert!(!is_expired(&jwt));
    }

    #[test]
    fn past_and_near_expiry_are_expired() {
        let past = make_jwt_with_exp(Utc::now().timestamp() - 10);
        assert!(is_expired(&past));
        let near = make_jwt_with_exp(Utc::now().timestamp() + 30);
        assert!(is_expired(&near));
    }

    #[test]
    fn opaque_token_is_not_expired() {
        assert!(decode_expiry("opaque-token").is_err());
        assert!(!is_expired("opaque-token"));
    }

    #[test]
    fn missing_exp_claim_is_reported() {
        let header = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"id":"u-1"}"#);
        let jwt = format!("{header}.{payload}.sig");
        let err = decode_expiry(&jwt).unwrap_err();
        assert!(err.to_string().contains("missing exp claim"));
    }

    #[test]
    fn bad_base64_is_reported() {
        let err = decode_expiry("header.!!!invalid!!!.signature").unwrap_err();
        assert!(err.to_string().contains("base64 decode failed"));
    }
}
