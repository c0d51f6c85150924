//! `Authorization` header parsing for Basic and Bearer schemes

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;

use crate::errors::AuthError;

/// Identifier and secret carried by a Basic credential
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredential {
    pub identifier: String,
    pub secret: String,
}

impl fmt::Debug for BasicCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredential")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Splits `<scheme> <value>` and checks the scheme word case-insensitively
fn split_scheme<'a>(raw_header: &'a str, scheme: &str) -> Result<&'a str, AuthError> {
    let parts: Vec<&str> = raw_header.split(' ').collect();
    let [word, value] = parts.as_slice() else {
        return Err(AuthError::malformed("token format is invalid"));
    };

    if !word.eq_ignore_ascii_case(scheme) {
        return Err(AuthError::malformed(format!("expected {} scheme", scheme)));
    }
    if value.is_empty() {
        return Err(AuthError::malformed("token format is invalid"));
    }

    Ok(*value)
}

/// Parses `Basic base64(identifier:secret)`
///
/// The decoded pair is split on the first `:` and both sides must be non-empty.
pub fn parse_basic_credential(raw_header: &str) -> Result<BasicCredential, AuthError> {
    let encoded = split_scheme(raw_header, "basic")?;

    let decoded = STANDARD
        .decode(encoded)
        .map_err(|_| AuthError::malformed("credential is not valid base64"))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| AuthError::malformed("credential is not valid UTF-8"))?;

    match decoded.split_once(':') {
        Some((identifier, secret)) if !identifier.is_empty() && !secret.is_empty() => {
            Ok(BasicCredential {
                identifier: identifier.to_string(),
                secret: secret.to_string(),
            })
        }
        _ => Err(AuthError::malformed("credential must be identifier:secret")),
    }
}

/// Returns the token part of `Bearer <token>`
pub fn extract_bearer_token(raw_header: &str) -> Result<&str, AuthError> {
    split_scheme(raw_header, "bearer")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic(pair: &str) -> String {
        format!("Basic {}", STANDARD.encode(pair))
    }

    #[test]
    fn test_parse_basic_credential() {
        let credential = parse_basic_credential(&basic("a@b.com:pw")).unwrap();
        assert_eq!(credential.identifier, "a@b.com");
        assert_eq!(credential.secret, "pw");
    }

    #[test]
    fn test_basic_scheme_is_case_insensitive() {
        let header = format!("basic {}", STANDARD.encode("a@b.com:pw"));
        assert!(parse_basic_credential(&header).is_ok());
    }

    #[test]
    fn test_basic_splits_on_first_colon() {
        let credential = parse_basic_credential(&basic("a@b.com:p:w")).unwrap();
        assert_eq!(credential.secret, "p:w");
    }

    #[test]
    fn test_basic_rejects_malformed() {
        let cases = vec![
            basic("a@b.com"),
            basic(":pw"),
            basic("a@b.com:"),
            format!("Bearer {}", STANDARD.encode("a@b.com:pw")),
            "Basic".to_string(),
            format!("Basic {} extra", STANDARD.encode("a@b.com:pw")),
            "Basic !!!".to_string(),
        ];

        for case in cases {
            assert!(
                matches!(
                    parse_basic_credential(&case),
                    Err(AuthError::MalformedCredential { .. })
                ),
                "expected malformed credential for {:?}",
                case
            );
        }
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc").unwrap(), "abc");
        assert_eq!(extract_bearer_token("bearer abc").unwrap(), "abc");
        assert!(extract_bearer_token("bearer").is_err());
        assert!(extract_bearer_token("basic abc").is_err());
        assert!(extract_bearer_token("Bearer a b").is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let credential = parse_basic_credential(&basic("a@b.com:hunter2")).unwrap();
        assert!(!format!("{:?}", credential).contains("hunter2"));
    }
}
