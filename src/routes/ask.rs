use crate::forms;
use crate::services::GeminiClient;
use actix_web::{post, web, HttpResponse, Responder, Result};
use serde_json::json;

/// POST /ask
/// Forwards the question to the configured Gemini model and relays the full
/// completion as `{answer}`. Upstream failures come back as `{error}` with
/// status 500; there are no retries and no streaming.
#[tracing::instrument(name = "Ask question.", skip(gemini))]
#[post("/ask")]
pub async fn ask_handler(
    form: web::Json<forms::AskRequest>,
    gemini: web::Data<GeminiClient>,
) -> Result<impl Responder> {
    let Some(question) = form.question() else {
        return Ok(HttpResponse::BadRequest().json(json!({"error": "Question is required"})));
    };

    match gemini.ask(question).await {
        Ok(answer) => Ok(HttpResponse::Ok().json(json!({"answer": answer}))),
        Err(err) => {
            tracing::error!("Failed to get answer from Gemini API: {:?}", err);
            Ok(HttpResponse::InternalServerError().json(json!({"error": err.to_string()})))
        }
    }
}
