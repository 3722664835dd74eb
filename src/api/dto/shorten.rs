//! DTOs for link shortening and link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to shorten a single destination URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// Absolute URL the short code will redirect to.
    ///
    /// `full` is accepted as an alias for older clients. A missing field
    /// deserializes to an empty string and fails validation with 400.
    #[serde(default, alias = "full")]
    #[validate(length(min = 1, message = "Destination must not be empty"))]
    #[validate(url(message = "Invalid URL format"))]
    pub destination: String,
}

/// JSON representation of a stored link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub code: String,
    pub destination: String,
    pub clicks: i64,
    pub owner: Option<i64>,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

impl LinkResponse {
    pub fn new(link: Link, short_url: String) -> Self {
        Self {
            id: link.id,
            code: link.code,
            destination: link.destination,
            clicks: link.clicks,
            owner: link.owner,
            short_url,
            created_at: link.created_at,
        }
    }
}

/// Plain acknowledgement body, e.g. after a delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> ShortenRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_destination() {
        let req = parse(json!({ "destination": "https://example.com/a?b=c" }));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_full_alias() {
        let req = parse(json!({ "full": "https://example.com" }));
        assert_eq!(req.destination, "https://example.com");
    }

    #[test]
    fn test_missing_destination_fails_validation() {
        let req = parse(json!({}));
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("destination"));
    }

    #[test]
    fn test_not_a_url_fails_validation() {
        let req = parse(json!({ "destination": "not a url" }));
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_link_response_shape() {
        let link = Link::new(
            7,
            "aB3_x-".to_string(),
            "https://example.com".to_string(),
            2,
            Some(1),
            Utc::now(),
        );
        let body = serde_json::to_value(LinkResponse::new(
            link,
            "https://sho.rt/aB3_x-".to_string(),
        ))
        .unwrap();

        assert_eq!(body["id"], 7);
        assert_eq!(body["owner"], 1);
        assert_eq!(body["clicks"], 2);
        assert_eq!(body["short_url"], "https://sho.rt/aB3_x-");
        assert!(body.get("created_at").is_some());
    }
}
