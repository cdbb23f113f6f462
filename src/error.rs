use actix_web::{
    http::{header, StatusCode},
    HttpResponse, ResponseError,
};
use serde_json::json;
use thiserror::Error;

/// Rejection reasons for a new review, checked in declaration order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ReviewBody is missing.")]
    MissingReviewBody,

    #[error("Location is missing.")]
    MissingLocation,

    #[error("invalid location")]
    InvalidLocation,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid {param} '{value}': expected YYYY-MM-DD")]
    InvalidDate { param: &'static str, value: String },

    #[error("malformed parameters: {0}")]
    MalformedForm(String),

    #[error("method not allowed")]
    MethodNotAllowed,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidDate { .. } | ApiError::MalformedForm(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let ApiError::MethodNotAllowed = self {
            response.insert_header((header::ALLOW, "GET, POST"));
        }
        response.json(json!({ "error": self.to_string() }))
    }
}

/// Failures while loading the startup dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to open dataset {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_exact() {
        assert_eq!(
            ValidationError::MissingReviewBody.to_string(),
            "ReviewBody is missing."
        );
        assert_eq!(
            ValidationError::MissingLocation.to_string(),
            "Location is missing."
        );
        assert_eq!(ValidationError::InvalidLocation.to_string(), "invalid location");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(ValidationError::InvalidLocation).status_code(),
            StatusCode::BAD_REQUEST
        );
        let bad_date = ApiError::InvalidDate {
            param: "start_date",
            value: "yesterday".into(),
        };
        assert_eq!(bad_date.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            bad_date.to_string(),
            "invalid start_date 'yesterday': expected YYYY-MM-DD"
        );

        let not_allowed = ApiError::MethodNotAllowed.error_response();
        assert_eq!(not_allowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            not_allowed.headers().get(header::ALLOW).unwrap(),
            "GET, POST"
        );
    }
}
