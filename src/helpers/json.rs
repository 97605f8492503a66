use actix_web::http::StatusCode;
use actix_web::{error, Error, HttpResponse};
use serde_derive::Serialize;

/// Envelope returned by the mutation endpoints. Read endpoints answer with a
/// bare JSON array instead; that asymmetry is part of the external contract.
#[derive(Serialize)]
pub(crate) struct JsonResponse {
    pub(crate) success: bool,
    pub(crate) message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<i32>,
}

impl JsonResponse {
    pub(crate) fn ok(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(JsonResponse {
            success: true,
            message: message.to_string(),
            id: None,
        })
    }

    pub(crate) fn saved(id: i32, message: &str) -> HttpResponse {
        HttpResponse::Ok().json(JsonResponse {
            success: true,
            message: message.to_string(),
            id: Some(id),
        })
    }

    pub(crate) fn bad_request(message: &str) -> Error {
        Self::failure(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn not_found(message: &str) -> Error {
        Self::failure(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn method_not_allowed(message: &str) -> HttpResponse {
        HttpResponse::MethodNotAllowed().json(JsonResponse {
            success: false,
            message: message.to_string(),
            id: None,
        })
    }

    pub(crate) fn internal_server_error(message: &str) -> Error {
        Self::failure(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    // Failure envelopes are actix errors so handlers can bail with `?`.
    fn failure(code: StatusCode, message: &str) -> Error {
        let body = HttpResponse::build(code).json(JsonResponse {
            success: false,
            message: message.to_string(),
            id: None,
        });
        error::InternalError::from_response(message.to_string(), body).into()
    }
}
