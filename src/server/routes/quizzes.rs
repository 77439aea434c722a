use axum::extract::rejection::JsonRejection;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::queries::questions::{get_all_questions, get_questions_for_category};
use crate::db::Question;
use crate::quiz::pick_question;
use crate::server::app::AppState;
use crate::telemetry::QUIZ_QUESTION_CNTR;

use super::{ApiError, ApiResponse};

const ALL_CATEGORIES: i64 = 0;

#[derive(Deserialize)]
struct QuizBody {
    quiz_category: QuizCategory,
    #[serde(default)]
    previous_questions: Vec<i64>,
}

// the client also sends a `type` label; only the id matters here
#[derive(Deserialize)]
struct QuizCategory {
    id: i64,
}

#[derive(Serialize)]
#[serde(untagged)]
enum QuizResponse {
    Next { success: bool, question: Question },
    Exhausted { success: bool, message: &'static str },
}

async fn next_quiz_question(
    State(pool): State<SqlitePool>,
    body: Result<Json<QuizBody>, JsonRejection>,
) -> ApiResponse<QuizResponse> {
    let Json(body) = body.map_err(|_| ApiError::BadRequest)?;
    let candidates = if body.quiz_category.id == ALL_CATEGORIES {
        get_all_questions(&pool).await?
    } else {
        get_questions_for_category(&pool, body.quiz_category.id).await?
    };

    match pick_question(candidates, &body.previous_questions) {
        Some(question) => {
            QUIZ_QUESTION_CNTR
                .with_label_values(&[question.category.to_string().as_str()])
                .inc();
            Ok(Json(QuizResponse::Next {
                success: true,
                question,
            }))
        }
        None => Ok(Json(QuizResponse::Exhausted {
            success: true,
            message: "Quiz over",
        })),
    }
}

pub fn quiz_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_quiz_question))
        .with_state(state)
}
