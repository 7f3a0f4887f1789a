use super::StoreError;
use sqlx::{Postgres, Transaction};
use std::net::IpAddr;
use tracing::Instrument;

/// Binding type for an address a host answers on directly.
pub const BIND_TYPE_REGULAR: &str = "regular";

/// Records an IP address as allocated to an object under the given
/// interface name.
pub async fn bind_to_object(
    tx: &mut Transaction<'_, Postgres>,
    addr: &IpAddr,
    object_id: i32,
    if_name: &str,
    bind_type: &str,
) -> Result<(), StoreError> {
    let query_span = tracing::info_span!("Bind IP to object.");
    sqlx::query(
        r#"
        INSERT INTO ip_allocation (ip, object_id, name, type)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(addr.to_string())
    .bind(object_id)
    .bind(if_name)
    .bind(bind_type)
    .execute(&mut **tx)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to bind {} to object {}: {:?}", addr, object_id, err);
        StoreError::Database(err)
    })?;

    Ok(())
}
