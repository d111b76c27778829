//! Request identifiers
//!
//! Request IDs are `req_` followed by the simple (hyphenless) form of a
//! UUIDv7, so they sort by creation time:
//!
//! ```rust
//! use users_service::ids::RequestId;
//!
//! let request_id = RequestId::new();
//! assert!(request_id.to_string().starts_with("req_"));
//! ```

use http::Request;
use std::fmt;
use std::str::FromStr;
use tower_http::request_id::{MakeRequestId, RequestId as TowerRequestId};
use uuid::Uuid;

/// A prefixed, time-sortable request identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    /// The prefix used for request IDs
    pub const PREFIX: &'static str = "req";

    /// Creates a new request ID with a UUIDv7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", Self::PREFIX, self.0.simple())
    }
}

impl FromStr for RequestId {
    type Err = RequestIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, suffix) = s.split_once('_').ok_or(RequestIdError::MissingPrefix)?;
        if prefix != Self::PREFIX {
            return Err(RequestIdError::InvalidPrefix {
                expected: Self::PREFIX.to_string(),
                actual: prefix.to_string(),
            });
        }
        Ok(Self(Uuid::try_parse(suffix)?))
    }
}

/// Error type for request ID parsing
#[derive(Debug, thiserror::Error)]
pub enum RequestIdError {
    /// No `prefix_` separator was found
    #[error("request ID has no prefix")]
    MissingPrefix,

    /// The prefix was not the expected value
    #[error("invalid prefix: expected '{expected}', got '{actual}'")]
    InvalidPrefix {
        /// The expected prefix
        expected: String,
        /// The actual prefix found
        actual: String,
    },

    /// The suffix is not a UUID
    #[error("failed to parse request ID: {0}")]
    Parse(#[from] uuid::Error),
}

/// `MakeRequestId` for tower-http that produces [`RequestId`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeTypedRequestId;

impl MakeRequestId for MakeTypedRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<TowerRequestId> {
        let header_value = http::HeaderValue::from_str(&RequestId::new().to_string()).ok()?;
        Some(TowerRequestId::new(header_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_format() {
        let id = RequestId::new().to_string();
        assert!(id.starts_with("req_"));
        // prefix (3) + underscore (1) + simple uuid (32)
        assert_eq!(id.len(), 36);
    }

    #[test]
    fn test_request_id_round_trip() {
        let id = RequestId::new();
        let parsed = RequestId::from_str(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_request_id_invalid_prefix() {
        let result = RequestId::from_str("usr_0190b5d4c9b87c3a9e6b1f2d3c4b5a69");
        match result.unwrap_err() {
            RequestIdError::InvalidPrefix { expected, actual } => {
                assert_eq!(expected, "req");
                assert_eq!(actual, "usr");
            }
            other => panic!("Expected InvalidPrefix error, got {other:?}"),
        }
    }

    #[test]
    fn test_request_id_invalid_format() {
        assert!(RequestId::from_str("req_invalid").is_err());
        assert!(matches!(
            RequestId::from_str("noprefix"),
            Err(RequestIdError::MissingPrefix)
        ));
    }

    #[test]
    fn test_request_id_ordering() {
        let id1 = RequestId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = RequestId::new();
        assert!(id1 < id2);
    }

    #[test]
    fn test_make_typed_request_id() {
        let mut maker = MakeTypedRequestId;
        let request = http::Request::builder().body(()).unwrap();

        let header_value = maker.make_request_id(&request).unwrap().into_header_value();
        assert!(header_value.to_str().unwrap().starts_with("req_"));
    }
}
