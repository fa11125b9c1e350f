//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every trivia handler and the schema wrappers from
//! [`crate::inbound::http::schemas`]. Swagger UI serves it in debug builds
//! and `cargo run --bin openapi-dump` exports it for tooling.

use utoipa::OpenApi;

use crate::inbound::http::categories::CategoriesResponse;
use crate::inbound::http::questions::{
    CreateQuestionRequestBody, CreateQuestionResponse, DeleteQuestionResponse, QuestionBody,
    QuestionListResponse, SearchQuestionsRequestBody,
};
use crate::inbound::http::quizzes::{QuizCategoryBody, QuizRequestBody, QuizResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the trivia REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia API",
        description = "Browse, search, add and delete trivia questions, and play quizzes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::index::index,
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::category_questions,
        crate::inbound::http::questions::list_questions,
        crate::inbound::http::questions::search_questions,
        crate::inbound::http::questions::create_question,
        crate::inbound::http::questions::delete_question,
        crate::inbound::http::quizzes::play_quiz,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        QuestionBody,
        QuestionListResponse,
        CategoriesResponse,
        CreateQuestionRequestBody,
        CreateQuestionResponse,
        DeleteQuestionResponse,
        SearchQuestionsRequestBody,
        QuizCategoryBody,
        QuizRequestBody,
        QuizResponse,
    )),
    tags(
        (name = "index", description = "Service greeting"),
        (name = "categories", description = "Category listing and browsing"),
        (name = "questions", description = "Question listing, search, creation and deletion"),
        (name = "quizzes", description = "Quiz play"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document.

    use super::*;
    use crate::domain::{DIFFICULTY_MAX, DIFFICULTY_MIN};
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn error_schema_has_envelope_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "success");
        assert_object_schema_has_field(error_schema, "error");
        assert_object_schema_has_field(error_schema, "message");
    }

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/categories",
            "/categories/{id}/questions",
            "/questions",
            "/questions/search",
            "/questions/{id}",
            "/quizzes",
            "/health/ready",
            "/health/live",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn question_paths_carry_both_methods() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/questions").expect("questions path");
        assert!(item.get.is_some());
        assert!(item.post.is_some());
    }

    #[test]
    fn difficulty_bounds_match_the_domain_rule() {
        let doc = serde_json::to_value(ApiDoc::openapi()).expect("document serializes");
        let schemas = &doc["components"]["schemas"];
        let difficulty = &schemas["QuestionBody"]["properties"]["difficulty"];
        assert_eq!(
            difficulty["minimum"].as_f64(),
            Some(f64::from(DIFFICULTY_MIN))
        );
        assert_eq!(
            difficulty["maximum"].as_f64(),
            Some(f64::from(DIFFICULTY_MAX))
        );
    }
}
