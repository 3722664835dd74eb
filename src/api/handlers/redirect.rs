//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_code_alphabet;

/// Redirects a short code to its destination.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Reject codes with characters outside the code alphabet
/// 2. Look the code up and turn the destination into a `Location` value
/// 3. Count the click
/// 4. Return `302 Found` with the destination in `Location`
///
/// The click is written before the response goes out. A store failure fails
/// the request instead of redirecting without counting. A destination that
/// cannot be sent as a header fails with 500 and is not counted.
///
/// # Errors
///
/// Returns 404 Not Found for unknown codes.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if !is_code_alphabet(&code) {
        return Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        ));
    }

    let location = state
        .link_service
        .resolve_with(&code, |destination| {
            HeaderValue::try_from(destination).map_err(|e| {
                AppError::internal(
                    "Stored destination is not a valid Location header",
                    json!({ "code": code, "reason": e.to_string() }),
                )
            })
        })
        .await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

#[cfg(test)]
mod tests {
    use crate::api::handlers::test_support::{Mocks, test_link};
    use crate::error::AppError;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_redirect_found() {
        let mut mocks = Mocks::new();
        mocks
            .links
            .expect_find_by_code()
            .withf(|code| code == "aB3xY9")
            .returning(|code| Ok(Some(test_link(1, code, "https://example.com/target", Some(1)))));
        mocks
            .links
            .expect_increment_clicks()
            .withf(|code| code == "aB3xY9")
            .times(1)
            .returning(|_| Ok(true));

        let response = mocks.server().get("/aB3xY9").await;

        response.assert_status(StatusCode::FOUND);
        assert_eq!(response.header("location"), "https://example.com/target");
    }

    #[tokio::test]
    async fn test_redirect_unknown_code() {
        let mut mocks = Mocks::new();
        mocks.links.expect_find_by_code().returning(|_| Ok(None));
        mocks.links.expect_increment_clicks().times(0);

        let response = mocks.server().get("/zzzzzz").await;

        response.assert_status_not_found();
        assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
    }

    #[tokio::test]
    async fn test_redirect_foreign_characters_skip_store() {
        let mut mocks = Mocks::new();
        mocks.links.expect_find_by_code().times(0);

        mocks.server().get("/favicon.ico").await.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_redirect_fails_when_click_cannot_be_counted() {
        let mut mocks = Mocks::new();
        mocks
            .links
            .expect_find_by_code()
            .returning(|code| Ok(Some(test_link(1, code, "https://example.com", None))));
        mocks.links.expect_increment_clicks().returning(|_| {
            Err(AppError::unavailable("Database is unavailable", json!({})))
        });

        let response = mocks.server().get("/aB3xY9").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_redirect_unsendable_destination_is_not_counted() {
        let mut mocks = Mocks::new();
        mocks
            .links
            .expect_find_by_code()
            .returning(|code| Ok(Some(test_link(1, code, "https://example.com/\nx", None))));
        mocks.links.expect_increment_clicks().times(0);

        let response = mocks.server().get("/aB3xY9").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.json::<Value>()["error"]["code"], "internal_error");
    }
}
