//! Category HTTP handlers.

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ports::CategoryQuestionsRequest;
use crate::domain::{CategoryId, CategoryMap, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::questions::{PageQuery, QuestionListResponse};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Every category keyed by id.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    /// Category id (as a string key) to display label.
    #[schema(value_type = Object, example = json!({"1": "Science", "2": "Art"}))]
    pub categories: CategoryMap,
    pub total_categories: usize,
}

/// List every category.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories", body = CategoriesResponse),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "listCategories"
)]
#[get("/categories")]
pub async fn list_categories(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<CategoriesResponse>> {
    let categories = state.trivia.list_categories().await?;
    Ok(web::Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

/// Page through the questions of one category.
///
/// An existing category without questions yields an empty page; an unknown
/// or non-positive id is not found.
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(("id" = i32, Path, description = "Category id"), PageQuery),
    responses(
        (status = 200, description = "Questions in the category", body = QuestionListResponse),
        (status = 404, description = "No such category", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "listCategoryQuestions"
)]
#[get("/categories/{id}/questions")]
pub async fn category_questions(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<QuestionListResponse>> {
    let raw = path.into_inner();
    let category_id =
        CategoryId::new(raw).map_err(|_| Error::not_found(format!("category {raw} not found")))?;
    let listing = state
        .trivia
        .questions_by_category(CategoryQuestionsRequest {
            category_id,
            page: query.index(),
        })
        .await?;
    Ok(web::Json(listing.into()))
}
