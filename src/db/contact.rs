use crate::forms;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Contact>, String> {
    let query_span = tracing::info_span!("Fetch contact by id.");
    sqlx::query_as::<_, models::Contact>(
        r#"
        SELECT id, first_name, last_name, email, phone, updated_at
        FROM contacts
        WHERE id = $1
        LIMIT 1
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(Some)
    .or_else(|err| match err {
        sqlx::Error::RowNotFound => Ok(None),
        err => {
            tracing::error!("Failed to fetch contact {}, error: {:?}", id, err);
            Err(err.to_string())
        }
    })
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Contact>, String> {
    let query_span = tracing::info_span!("Fetch all contacts.");
    sqlx::query_as::<_, models::Contact>(
        r#"
        SELECT id, first_name, last_name, email, phone, updated_at
        FROM contacts
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch contacts, error: {:?}", err);
        err.to_string()
    })
}

pub async fn insert(pool: &PgPool, contact: forms::NewContact) -> Result<i32, String> {
    let query_span = tracing::info_span!("Saving new contact into the database");
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO contacts (first_name, last_name, email, phone)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(&contact.first_name)
    .bind(&contact.last_name)
    .bind(&contact.email)
    .bind(&contact.phone)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert contact, error: {:?}", err);
        err.to_string()
    })
}

/// Full-field replacement. Returns the number of rows matched so the caller
/// can distinguish a missing id.
pub async fn update(pool: &PgPool, contact: forms::UpdateContact) -> Result<u64, String> {
    let query_span = tracing::info_span!("Updating contact");
    sqlx::query(
        r#"
        UPDATE contacts
        SET first_name = $2,
            last_name = $3,
            email = $4,
            phone = $5,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = $1
        "#,
    )
    .bind(contact.id)
    .bind(&contact.first_name)
    .bind(&contact.last_name)
    .bind(&contact.email)
    .bind(&contact.phone)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(|result| result.rows_affected())
    .map_err(|err| {
        tracing::error!("Failed to update contact {}, error: {:?}", contact.id, err);
        err.to_string()
    })
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<u64, String> {
    let query_span = tracing::info_span!("Deleting contact");
    sqlx::query("DELETE FROM contacts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!("Failed to delete contact {}, error: {:?}", id, err);
            err.to_string()
        })
}
