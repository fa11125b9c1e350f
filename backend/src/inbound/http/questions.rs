//! Question HTTP handlers.
//!
//! ```text
//! GET    /questions?page=N
//! POST   /questions
//! POST   /questions/search?page=N
//! DELETE /questions/{id}
//! ```

use actix_web::{delete, get, post, web};
use pagination::PageIndex;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{ListQuestionsRequest, SearchQuestionsRequest};
use crate::domain::question_query::QuestionListing;
use crate::domain::{
    CategoryId, CategoryMap, Difficulty, Error, NewQuestion, Question, QuestionId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, LooseInteger, category_field_error, question_field_error, require,
};

const QUESTION: FieldName = FieldName::new("question");
const ANSWER: FieldName = FieldName::new("answer");
const DIFFICULTY: FieldName = FieldName::new("difficulty");
const CATEGORY: FieldName = FieldName::new("category");
const SEARCH_TERM: FieldName = FieldName::new("searchTerm");

/// `?page=N` query; absent, non-numeric or non-positive values mean page 1.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number.
    #[param(value_type = Option<u32>, example = 2)]
    pub page: Option<String>,
}

impl PageQuery {
    /// Resolve the requested page leniently.
    pub fn index(&self) -> PageIndex {
        PageIndex::parse_lenient(self.page.as_deref())
    }
}

/// Question as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionBody {
    #[schema(example = 5)]
    pub id: i32,
    #[schema(example = "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?")]
    pub question: String,
    #[schema(example = "Maya Angelou")]
    pub answer: String,
    #[schema(example = 4)]
    pub category: i32,
    /// Rating between `DIFFICULTY_MIN` and `DIFFICULTY_MAX`.
    #[schema(example = 2, minimum = 1, maximum = 5)]
    pub difficulty: i32,
}

impl From<&Question> for QuestionBody {
    fn from(value: &Question) -> Self {
        Self {
            id: value.id().get(),
            question: value.question().to_owned(),
            answer: value.answer().to_owned(),
            category: value.category().get(),
            difficulty: i32::from(value.difficulty().get()),
        }
    }
}

/// One page of questions.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionBody>,
    /// Size of the filtered set before paging.
    pub total_questions: usize,
    /// Category id to label mapping; only on the unscoped listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub categories: Option<CategoryMap>,
    /// Category the page is scoped to, `null` when unscoped.
    pub current_category: Option<i32>,
}

impl From<QuestionListing> for QuestionListResponse {
    fn from(value: QuestionListing) -> Self {
        let QuestionListing {
            page,
            categories,
            current_category,
        } = value;
        Self {
            success: true,
            total_questions: page.total(),
            questions: page.items().iter().map(QuestionBody::from).collect(),
            categories,
            current_category: current_category.map(CategoryId::get),
        }
    }
}

/// Request payload for creating a question.
///
/// Every field is required; `null` counts as missing.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateQuestionRequestBody {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[schema(value_type = Option<i64>, example = 3, minimum = 1, maximum = 5)]
    pub difficulty: Option<LooseInteger>,
    #[schema(value_type = Option<i64>, example = 1)]
    pub category: Option<LooseInteger>,
}

/// Response payload for question creation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: QuestionBody,
}

/// Response payload for question deletion.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    /// Id of the removed question.
    pub deleted: i32,
}

/// Request payload for searching questions.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct SearchQuestionsRequestBody {
    /// Case-insensitive substring; empty matches every question.
    #[serde(rename = "searchTerm")]
    #[schema(example = "title")]
    pub search_term: Option<String>,
}

fn parse_new_question(payload: CreateQuestionRequestBody) -> Result<NewQuestion, Error> {
    let question = require(payload.question, QUESTION)?;
    let answer = require(payload.answer, ANSWER)?;
    let difficulty = require(payload.difficulty, DIFFICULTY)?.resolve(DIFFICULTY)?;
    let category = require(payload.category, CATEGORY)?.resolve(CATEGORY)?;

    let difficulty = Difficulty::new(difficulty).map_err(|err| question_field_error(&err))?;
    let category = CategoryId::new(category).map_err(|err| category_field_error(CATEGORY, &err))?;
    NewQuestion::new(question, answer, category, difficulty)
        .map_err(|err| question_field_error(&err))
}

/// List every question, ten per page, with the category mapping.
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of questions", body = QuestionListResponse),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "listQuestions"
)]
#[get("/questions")]
pub async fn list_questions(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<QuestionListResponse>> {
    let listing = state
        .trivia
        .list_questions(ListQuestionsRequest {
            page: query.index(),
        })
        .await?;
    Ok(web::Json(listing.into()))
}

/// Page through the questions whose text contains the search term.
#[utoipa::path(
    post,
    path = "/questions/search",
    params(PageQuery),
    request_body = SearchQuestionsRequestBody,
    responses(
        (status = 200, description = "Matching questions", body = QuestionListResponse),
        (status = 400, description = "Missing search term", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "searchQuestions"
)]
#[post("/questions/search")]
pub async fn search_questions(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
    payload: web::Json<SearchQuestionsRequestBody>,
) -> ApiResult<web::Json<QuestionListResponse>> {
    let term = require(payload.into_inner().search_term, SEARCH_TERM)?;
    let listing = state
        .trivia
        .search_questions(SearchQuestionsRequest {
            term,
            page: query.index(),
        })
        .await?;
    Ok(web::Json(listing.into()))
}

/// Create a question.
///
/// # Examples
/// ```no_run
/// use actix_web::web;
/// use trivia::inbound::http::ApiResult;
/// use trivia::inbound::http::questions::{
///     CreateQuestionRequestBody, CreateQuestionResponse, create_question,
/// };
/// use trivia::inbound::http::state::HttpState;
///
/// async fn call_handler(
///     state: web::Data<HttpState>,
/// ) -> ApiResult<web::Json<CreateQuestionResponse>> {
///     let payload = web::Json(CreateQuestionRequestBody {
///         question: Some("What is the heaviest organ in the human body?".to_owned()),
///         answer: Some("The Liver".to_owned()),
///         difficulty: Some(4.into()),
///         category: Some(1.into()),
///     });
///     create_question(state, payload).await
/// }
/// ```
#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionRequestBody,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorSchema),
        (status = 422, description = "Body has the wrong shape", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "createQuestion"
)]
#[post("/questions")]
pub async fn create_question(
    state: web::Data<HttpState>,
    payload: web::Json<CreateQuestionRequestBody>,
) -> ApiResult<web::Json<CreateQuestionResponse>> {
    let draft = parse_new_question(payload.into_inner())?;
    let stored = state.trivia_command.create_question(draft).await?;
    Ok(web::Json(CreateQuestionResponse {
        success: true,
        created: QuestionBody::from(&stored),
    }))
}

/// Delete a question by id.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(("id" = i32, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponse),
        (status = 404, description = "No such question", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "deleteQuestion"
)]
#[delete("/questions/{id}")]
pub async fn delete_question(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<DeleteQuestionResponse>> {
    let raw = path.into_inner();
    let id = QuestionId::new(raw).map_err(|_| Error::not_found(format!("question {raw} not found")))?;
    let deleted = state.trivia_command.delete_question(id).await?;
    Ok(web::Json(DeleteQuestionResponse {
        success: true,
        deleted: deleted.get(),
    }))
}

#[cfg(test)]
#[path = "questions_tests.rs"]
mod tests;
