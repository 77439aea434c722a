use std::collections::BTreeMap;

use axum::extract::rejection::QueryRejection;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::queries::categories::{get_all_categories, get_category};
use crate::db::queries::questions::get_questions_for_category;
use crate::db::Question;
use crate::pagination::paginate;
use crate::server::app::AppState;

use super::{ApiError, ApiResponse, PageQuery};

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: String,
}

async fn list_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoriesResponse> {
    let categories = get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoriesResponse {
        success: true,
        categories: categories.into_iter().map(|c| (c.id, c.r#type)).collect(),
    }))
}

async fn questions_in_category(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    page: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResponse<CategoryQuestionsResponse> {
    let Query(PageQuery { page }) = page.map_err(|_| ApiError::BadRequest)?;
    let category = get_category(&pool, id).await?.ok_or(ApiError::NotFound)?;
    let questions = get_questions_for_category(&pool, id).await?;
    let total_questions = questions.len();

    // Unlike the full listing, an empty window here is not an error; the
    // category itself was found.
    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: paginate(questions, page),
        total_questions,
        current_category: category.r#type,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_in_category))
        .with_state(state)
}
