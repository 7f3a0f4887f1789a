use super::StoreError;
use sqlx::PgPool;
use tracing::Instrument;

// Inner/outer interface pairs of the stock port types in the inventory
// dictionary.
pub const ETHERNET_PORT_TYPE: &str = "1-24";
pub const FIBRE_CHANNEL_PORT_TYPE: &str = "9-50032";

#[tracing::instrument(name = "Delete ports for object.", skip(pool))]
pub async fn delete_for_object(pool: &PgPool, object_id: i32) -> Result<(), StoreError> {
    sqlx::query("DELETE FROM port WHERE object_id = $1")
        .bind(object_id)
        .execute(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to delete ports of object {}: {:?}", object_id, err);
            StoreError::Database(err)
        })?;

    Ok(())
}

/// Adds one port row. The (object, name, hardware id) combination is
/// unique, so re-reported ports come back as [`StoreError::Duplicate`].
pub async fn insert(
    pool: &PgPool,
    object_id: i32,
    name: &str,
    port_type: &str,
    label: &str,
    hw_id: &str,
) -> Result<(), StoreError> {
    let query_span = tracing::info_span!("Insert port.");
    sqlx::query(
        r#"
        INSERT INTO port (object_id, name, type, label, l2address)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(object_id)
    .bind(name)
    .bind(port_type)
    .bind(label)
    .bind(hw_id)
    .execute(pool)
    .instrument(query_span)
    .await
    .map_err(StoreError::from_write)?;

    Ok(())
}
