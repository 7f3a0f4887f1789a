use super::StoreError;
use chrono::{DateTime, Utc};
use sqlx::{Postgres, Row, Transaction};
use tracing::Instrument;

/// Inserts the base object row. The object name carries a unique index, so
/// a name collision comes back as [`StoreError::Duplicate`].
pub async fn insert(
    tx: &mut Transaction<'_, Postgres>,
    name: &str,
    label: &str,
    objtype_id: i32,
    asset_no: &str,
) -> Result<(i32, DateTime<Utc>), StoreError> {
    let query_span = tracing::info_span!("Insert inventory object.");
    let row = sqlx::query(
        r#"
        INSERT INTO object (name, label, objtype_id, asset_no, created_at)
        VALUES ($1, $2, $3, $4, now())
        RETURNING id, created_at
        "#,
    )
    .bind(name)
    .bind(label)
    .bind(objtype_id)
    .bind(asset_no)
    .fetch_one(&mut **tx)
    .instrument(query_span)
    .await
    .map_err(|err| match StoreError::from_write(err) {
        StoreError::Duplicate => {
            tracing::debug!("Object {:?} already exists", name);
            StoreError::Duplicate
        }
        other => {
            tracing::error!("Failed to insert object: {:?}", other);
            other
        }
    })?;

    let id: i32 = row.try_get("id")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok((id, created_at))
}
