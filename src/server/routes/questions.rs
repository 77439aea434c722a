use std::collections::BTreeMap;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::db::queries::categories::get_all_categories;
use crate::db::queries::questions;
use crate::db::Question;
use crate::pagination::paginate;
use crate::server::app::AppState;

use super::{ApiError, ApiResponse, PageQuery};

#[derive(Deserialize)]
struct NewQuestion {
    question: String,
    answer: String,
    // clients send the category id both as a number and as a string
    #[serde(deserialize_with = "deserialize_number_from_string")]
    category: i64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    difficulty: i64,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionListResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CreatedResponse {
    success: bool,
    created: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct DeletedResponse {
    success: bool,
    deleted: i64,
}

#[derive(Serialize)]
struct SearchResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    page: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResponse<QuestionListResponse> {
    let Query(PageQuery { page }) = page.map_err(|_| ApiError::BadRequest)?;
    let all = questions::get_all_questions(&pool).await?;
    let total_questions = all.len();
    let window = paginate(all, page);

    // An empty window covers both "no questions at all" and "page past the
    // end"; clients cannot tell the two apart.
    if window.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = get_all_categories(&pool).await?;
    Ok(Json(QuestionListResponse {
        success: true,
        questions: window,
        total_questions,
        categories: categories.into_iter().map(|c| (c.id, c.r#type)).collect(),
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    body: Result<Json<NewQuestion>, JsonRejection>,
) -> ApiResponse<CreatedResponse> {
    let Json(new_question) = body.map_err(|_| ApiError::Unprocessable)?;
    if new_question.question.is_empty() || new_question.answer.is_empty() {
        return Err(ApiError::Unprocessable);
    }

    let created = questions::create_question(
        &pool,
        &new_question.question,
        &new_question.answer,
        new_question.category,
        new_question.difficulty,
    )
    .await?;

    let all = questions::get_all_questions(&pool).await?;
    let total_questions = all.len();
    Ok(Json(CreatedResponse {
        success: true,
        created,
        questions: paginate(all, 1),
        total_questions,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> ApiResponse<DeletedResponse> {
    let removed = questions::delete_question(&pool, id).await?;
    if removed == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    page: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> ApiResponse<SearchResponse> {
    let Query(PageQuery { page }) = page.map_err(|_| ApiError::BadRequest)?;
    let Json(body) = body.map_err(|_| ApiError::Unprocessable)?;
    let term = match body.search_term {
        Some(term) if !term.is_empty() => term,
        _ => return Err(ApiError::Unprocessable),
    };

    let matches = questions::search_questions(&pool, &term).await?;
    if matches.is_empty() {
        return Err(ApiError::NotFound);
    }
    let total_questions = matches.len();
    Ok(Json(SearchResponse {
        success: true,
        questions: paginate(matches, page),
        total_questions,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
