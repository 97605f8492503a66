use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use actix_web::{post, web, HttpResponse, Result};
use sqlx::PgPool;

/// POST /contacts
/// Writes are dispatched on the `action` form field; a missing action means
/// create. Mutations answer with the `{success, message, id?}` envelope.
#[tracing::instrument(name = "Mutate contact.")]
#[post("")]
pub async fn mutate_handler(
    form: web::Form<forms::ContactPayload>,
    pg_pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match form.action() {
        forms::Action::Create => create(&form, pg_pool.get_ref()).await,
        forms::Action::Update => update(&form, pg_pool.get_ref()).await,
        forms::Action::Delete => delete(&form, pg_pool.get_ref()).await,
        forms::Action::Unknown => Err(JsonResponse::bad_request("Invalid action")),
    }
}

async fn create(payload: &forms::ContactPayload, pool: &PgPool) -> Result<HttpResponse> {
    let contact = payload
        .new_contact()
        .map_err(|err| JsonResponse::bad_request(&err))?;

    db::contact::insert(pool, contact)
        .await
        .map(|id| {
            tracing::info!("New contact {} has been saved to database", id);
            JsonResponse::saved(id, "Contact created successfully")
        })
        .map_err(|err| JsonResponse::internal_server_error(&err))
}

async fn update(payload: &forms::ContactPayload, pool: &PgPool) -> Result<HttpResponse> {
    let contact = payload
        .update_contact()
        .map_err(|err| JsonResponse::bad_request(&err))?;

    let rows = db::contact::update(pool, contact)
        .await
        .map_err(|err| JsonResponse::internal_server_error(&err))?;

    if rows == 0 {
        return Err(JsonResponse::not_found("Contact not found"));
    }
    Ok(JsonResponse::ok("Contact updated successfully"))
}

async fn delete(payload: &forms::ContactPayload, pool: &PgPool) -> Result<HttpResponse> {
    let id = payload
        .contact_id()
        .map_err(|err| JsonResponse::bad_request(&err))?;

    let rows = db::contact::delete(pool, id)
        .await
        .map_err(|err| JsonResponse::internal_server_error(&err))?;

    if rows == 0 {
        return Err(JsonResponse::not_found("Contact not found"));
    }
    Ok(JsonResponse::ok("Contact deleted successfully"))
}
