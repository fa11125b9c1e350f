//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and are registered with utoipa under
//! the domain type's path.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in the `error` field.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// A required field is missing or a value fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested question or category does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The body is valid JSON of the wrong shape.
    #[schema(rename = "unprocessable")]
    Unprocessable,
    /// The backing store cannot be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Failure payload: `success` is always `false` and no data fields appear.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Always `false`.
    #[schema(example = false)]
    success: bool,
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    error: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "question 42 not found")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details such as the offending field.
    #[schema(example = json!({"field": "difficulty", "code": "missing_field"}))]
    details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_lists_every_domain_code() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        // utoipa replaces :: with . in schema names
        assert_eq!(ErrorCodeSchema::name(), "crate.domain.ErrorCode");
        for code in [
            "invalid_request",
            "not_found",
            "unprocessable",
            "service_unavailable",
            "internal_error",
        ] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn error_schema_carries_the_failure_envelope() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        for field in ["success", "error", "message", "trace_id", "details"] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }
}
