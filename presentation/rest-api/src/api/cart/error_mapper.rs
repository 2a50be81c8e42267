use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::UserIdEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.user_id_empty",
            ),
            CartError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "cart.not_found"),
            CartError::MalformedData(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "cart.malformed_data",
            ),
            CartError::StorageUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "ServiceUnavailable",
                "cart.storage_unavailable",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_each_cart_error_to_its_status() {
        let cases = [
            (CartError::UserIdEmpty, StatusCode::BAD_REQUEST),
            (CartError::NotFound, StatusCode::NOT_FOUND),
            (
                CartError::MalformedData("eof".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CartError::StorageUnavailable(RepositoryError::unavailable("down")),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (err, expected) in cases {
            let (status, _) = err.into_error_response();
            assert_eq!(status, expected);
        }
    }

    #[test]
    fn should_not_leak_backend_detail_to_clients() {
        let (_, json) =
            CartError::StorageUnavailable(RepositoryError::unavailable("AUTH failed for 10.0.0.3"))
                .into_error_response();

        assert_eq!(json.0.message, "cart.storage_unavailable");
    }
}
