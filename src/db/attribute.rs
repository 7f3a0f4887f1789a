use super::StoreError;
use sqlx::{Postgres, Transaction};
use tracing::Instrument;

/// Upserts one attribute value for an object. `None` clears the value
/// while keeping the row, matching how the inventory treats attributes
/// that were reported but carry no reading.
pub async fn set_value(
    tx: &mut Transaction<'_, Postgres>,
    object_id: i32,
    attr_id: i32,
    value: Option<&str>,
) -> Result<(), StoreError> {
    let query_span = tracing::info_span!("Set object attribute value.");
    sqlx::query(
        r#"
        INSERT INTO attribute_value (object_id, attr_id, value)
        VALUES ($1, $2, $3)
        ON CONFLICT (object_id, attr_id) DO UPDATE SET value = EXCLUDED.value
        "#,
    )
    .bind(object_id)
    .bind(attr_id)
    .bind(value)
    .execute(&mut **tx)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to set attribute {}: {:?}", attr_id, err);
        StoreError::Database(err)
    })?;

    Ok(())
}
