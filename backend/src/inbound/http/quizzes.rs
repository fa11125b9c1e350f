//! Quiz play HTTP handler.
//!
//! The client keeps the play state: every turn it posts the ids it has
//! already been shown together with the chosen category, and receives one
//! unseen question or the "no more questions" signal.

use std::collections::HashSet;

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::QuestionId;
use crate::domain::ports::NextQuestionRequest;
use crate::domain::quiz::{QuizOutcome, QuizScope};
use crate::inbound::http::ApiResult;
use crate::inbound::http::questions::QuestionBody;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, LooseInteger, category_field_error, require,
};

const PREVIOUS_QUESTIONS: FieldName = FieldName::new("previous_questions");
const QUIZ_CATEGORY: FieldName = FieldName::new("quiz_category");
const QUIZ_CATEGORY_ID: FieldName = FieldName::new("quiz_category.id");

/// Category the quiz is scoped to; id `0` means every category.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct QuizCategoryBody {
    #[schema(value_type = Option<i64>, example = 0)]
    pub id: Option<LooseInteger>,
    /// Display label echoed by the client; ignored.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "click")]
    pub label: Option<String>,
}

/// Request payload for one quiz turn.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct QuizRequestBody {
    /// Ids already shown in this session.
    #[schema(value_type = Option<Vec<i64>>, example = json!([3, 12]))]
    pub previous_questions: Option<Vec<LooseInteger>>,
    pub quiz_category: Option<QuizCategoryBody>,
}

/// Response payload for one quiz turn.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    /// The drawn question; absent once the pool is exhausted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionBody>,
    /// Unseen in-scope questions before this draw, the drawn one included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_more_questions: Option<bool>,
}

impl From<QuizOutcome> for QuizResponse {
    fn from(value: QuizOutcome) -> Self {
        match value {
            QuizOutcome::Next {
                question,
                remaining,
            } => Self {
                success: true,
                question: Some(QuestionBody::from(&question)),
                total_questions: Some(remaining),
                no_more_questions: None,
            },
            QuizOutcome::Exhausted => Self {
                success: true,
                question: None,
                total_questions: None,
                no_more_questions: Some(true),
            },
        }
    }
}

fn parse_turn(payload: QuizRequestBody) -> ApiResult<NextQuestionRequest> {
    let previous = require(payload.previous_questions, PREVIOUS_QUESTIONS)?;
    let category = require(payload.quiz_category, QUIZ_CATEGORY)?;
    let raw_scope = require(category.id, QUIZ_CATEGORY_ID)?.resolve(QUIZ_CATEGORY_ID)?;
    let scope = QuizScope::from_raw(raw_scope)
        .map_err(|err| category_field_error(QUIZ_CATEGORY_ID, &err))?;

    let mut previous_questions = HashSet::with_capacity(previous.len());
    for entry in &previous {
        let raw = entry.resolve(PREVIOUS_QUESTIONS)?;
        // Non-positive ids cannot name a stored question, so they exclude nothing.
        if let Ok(id) = QuestionId::new(raw) {
            previous_questions.insert(id);
        }
    }

    Ok(NextQuestionRequest {
        scope,
        previous_questions,
    })
}

/// Draw the next unseen question for a quiz session.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestBody,
    responses(
        (status = 200, description = "Next question or no more questions", body = QuizResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorSchema),
        (status = 422, description = "Body has the wrong shape", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["quizzes"],
    operation_id = "playQuiz"
)]
#[post("/quizzes")]
pub async fn play_quiz(
    state: web::Data<HttpState>,
    payload: web::Json<QuizRequestBody>,
) -> ApiResult<web::Json<QuizResponse>> {
    let request = parse_turn(payload.into_inner())?;
    let outcome = state.quiz.next_question(request).await?;
    Ok(web::Json(outcome.into()))
}

#[cfg(test)]
mod tests {
    //! Quiz turn parsing, exclusion and exhaustion over HTTP.
    use super::*;
    use crate::domain::ports::{MockQuizQuery, QuestionRepository};
    use crate::domain::{CategoryId, Difficulty, NewQuestion};
    use crate::inbound::http::test_utils::{memory_state, test_app};
    use crate::outbound::memory::InMemoryTriviaStore;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    async fn store_with(layout: &[(i64, usize)]) -> Arc<InMemoryTriviaStore> {
        let store = Arc::new(InMemoryTriviaStore::with_default_categories());
        for (category, count) in layout {
            for n in 0..*count {
                let draft = NewQuestion::new(
                    format!("Quiz question {n}?"),
                    "answer",
                    CategoryId::new(*category).expect("valid category"),
                    Difficulty::new(2).expect("valid difficulty"),
                )
                .expect("valid question");
                store.insert_question(&draft).await.expect("insert question");
            }
        }
        store
    }

    #[actix_web::test]
    async fn playing_through_a_category_never_repeats_and_then_exhausts() {
        let store = store_with(&[(1, 2), (2, 3)]).await;
        let app = actix_test::init_service(test_app(memory_state(store))).await;
        let mut seen: Vec<i64> = Vec::new();

        for expected_total in (1..=3).rev() {
            let req = actix_test::TestRequest::post()
                .uri("/quizzes")
                .set_json(json!({
                    "previous_questions": seen,
                    "quiz_category": {"id": 2, "type": "Art"},
                }))
                .to_request();
            let body: Value = actix_test::call_and_read_body_json(&app, req).await;

            assert_eq!(body["success"], true);
            assert_eq!(body["total_questions"], expected_total);
            assert_eq!(body["question"]["category"], 2);
            let id = body["question"]["id"].as_i64().expect("question id");
            assert!(!seen.contains(&id), "question {id} repeated");
            seen.push(id);
        }

        let req = actix_test::TestRequest::post()
            .uri("/quizzes")
            .set_json(json!({
                "previous_questions": seen,
                "quiz_category": {"id": "2"},
            }))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"success": true, "no_more_questions": true}));
    }

    #[actix_web::test]
    async fn scope_zero_draws_from_every_category() {
        let store = store_with(&[(1, 1), (4, 1)]).await;
        let app = actix_test::init_service(test_app(memory_state(store))).await;

        let req = actix_test::TestRequest::post()
            .uri("/quizzes")
            .set_json(json!({"previous_questions": [1], "quiz_category": {"id": 0}}))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["question"]["id"], 2);
        assert_eq!(body["total_questions"], 1);
    }

    #[actix_web::test]
    async fn unknown_category_is_exhausted_rather_than_missing() {
        let store = store_with(&[(1, 2)]).await;
        let app = actix_test::init_service(test_app(memory_state(store))).await;

        let req = actix_test::TestRequest::post()
            .uri("/quizzes")
            .set_json(json!({"previous_questions": [], "quiz_category": {"id": 77}}))
            .to_request();
        let res = actix_test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["no_more_questions"], true);
    }

    #[rstest]
    #[case(json!({"quiz_category": {"id": 0}}), "previous_questions")]
    #[case(json!({"previous_questions": []}), "quiz_category")]
    #[case(json!({"previous_questions": [], "quiz_category": {"type": "Art"}}), "quiz_category.id")]
    #[case(json!({"previous_questions": [], "quiz_category": {"id": -1}}), "quiz_category.id")]
    #[case(json!({"previous_questions": [], "quiz_category": {"id": "all"}}), "quiz_category.id")]
    #[case(json!({"previous_questions": ["x"], "quiz_category": {"id": 0}}), "previous_questions")]
    #[actix_web::test]
    async fn invalid_turns_are_rejected_before_drawing(#[case] payload: Value, #[case] field: &str) {
        let mut quiz = MockQuizQuery::new();
        quiz.expect_next_question().never();
        let state = HttpState::fixture().with_quiz(Arc::new(quiz));
        let app = actix_test::init_service(test_app(state)).await;

        let req = actix_test::TestRequest::post()
            .uri("/quizzes")
            .set_json(payload)
            .to_request();
        let res = actix_test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["details"]["field"], field);
    }

    #[actix_web::test]
    async fn previous_ids_reach_the_port_as_a_set() {
        let mut quiz = MockQuizQuery::new();
        quiz.expect_next_question()
            .withf(|request| {
                request.scope == QuizScope::Category(CategoryId::new(3).expect("valid id"))
                    && request.previous_questions.len() == 2
            })
            .times(1)
            .return_once(|_| Ok(QuizOutcome::Exhausted));
        let state = HttpState::fixture().with_quiz(Arc::new(quiz));
        let app = actix_test::init_service(test_app(state)).await;

        let req = actix_test::TestRequest::post()
            .uri("/quizzes")
            .set_json(json!({
                "previous_questions": [4, "9", 4, 0],
                "quiz_category": {"id": 3},
            }))
            .to_request();
        let res = actix_test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
    }
}
