use crate::db;
use crate::helpers::JsonResponse;
use actix_web::{get, web, Responder, Result};
use serde::Deserialize;
use sqlx::PgPool;

#[derive(Debug, Deserialize)]
pub struct Query {
    pub id: Option<i32>,
}

/// GET /contacts?id={id}
/// With `id`: the zero-or-one matching contact, still wrapped as a list.
/// Without: every contact ordered by ascending id. Reads answer with the bare
/// row array, no envelope.
#[tracing::instrument(name = "List contacts.")]
#[get("")]
pub async fn list_handler(
    query: web::Query<Query>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let contacts = match query.id {
        Some(id) => db::contact::fetch(pg_pool.get_ref(), id)
            .await
            .map(|contact| contact.into_iter().collect()),
        None => db::contact::fetch_all(pg_pool.get_ref()).await,
    }
    .map_err(|err| JsonResponse::internal_server_error(&err))?;

    Ok(web::Json(contacts))
}
