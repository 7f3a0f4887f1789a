use super::StoreError;
use sqlx::PgPool;
use tracing::Instrument;

/// Dictionary chapter holding the object-type entries.
pub const CHAP_OBJTYPE: i32 = 1;

/// Object type every record created through this service is filed under.
pub const OBJTYPE_SERVER: &str = "Server";

// Attribute names the create-server workflow writes to. These rows are
// part of the inventory seed data, not created by this service.
pub const ATTR_CPU_TYPE_COUNT: &str = "CPU, type / count";
pub const ATTR_CPU_FREQ: &str = "CPU frequency, MHz";
pub const ATTR_MEMORY: &str = "Memory, GiB";

pub async fn object_type_id(pool: &PgPool, name: &str) -> Result<Option<i32>, StoreError> {
    let query_span = tracing::info_span!("Resolve object type id.");
    let id: Option<i32> = sqlx::query_scalar(
        r#"
        SELECT dict_key
        FROM dictionary
        WHERE chapter_id = $1 AND dict_value = $2
        "#,
    )
    .bind(CHAP_OBJTYPE)
    .bind(name)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to resolve object type {:?}: {:?}", name, err);
        err
    })?;

    Ok(id)
}

pub async fn attribute_id(pool: &PgPool, name: &str) -> Result<Option<i32>, StoreError> {
    let query_span = tracing::info_span!("Resolve attribute id.");
    let id: Option<i32> = sqlx::query_scalar(
        r#"
        SELECT id
        FROM attribute
        WHERE name = $1
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to resolve attribute {:?}: {:?}", name, err);
        err
    })?;

    Ok(id)
}
