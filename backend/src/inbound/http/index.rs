//! Root greeting.

use actix_web::{HttpResponse, get};

/// Plain-text greeting confirming the service is up.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = String, content_type = "text/plain")),
    tags = ["index"],
    operation_id = "index"
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hello Trivia")
}
