use crate::db;
use crate::errors::ServerMgmtError;
use crate::forms;
use crate::helpers::RecordCreated;
use crate::models;
use actix_web::{post, web, Responder, Result};
use sqlx::{PgPool, Postgres, Transaction};

// workflow
// resolve dictionary ids, validate, then one transaction for the object
// with its attributes and IP bindings; ports are attached afterwards

#[tracing::instrument(name = "Add server.", skip(form, pg_pool))]
#[post("")]
pub async fn add(
    form: web::Json<forms::server::ServerForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder, ServerMgmtError> {
    let pool = pg_pool.get_ref();

    let objtype_id = db::dictionary::object_type_id(pool, db::dictionary::OBJTYPE_SERVER)
        .await
        .map_err(|_| ServerMgmtError::Persistence)?
        .ok_or_else(|| {
            ServerMgmtError::TypeResolution(db::dictionary::OBJTYPE_SERVER.to_string())
        })?;

    let server = form.normalize()?;
    let attr_writes = resolve_attribute_writes(pool, &server).await?;

    let mut tx = pool.begin().await.map_err(|err| {
        tracing::error!("Failed to begin transaction: {:?}", err);
        ServerMgmtError::Persistence
    })?;

    let mut record = match persist_server(&mut tx, &server, objtype_id, &attr_writes).await {
        Ok(record) => record,
        Err(err) => {
            let _ = tx.rollback().await;
            return Err(err);
        }
    };

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit transaction: {:?}", err);
        ServerMgmtError::Persistence
    })?;

    // From here on the object is durable; port writes run outside any
    // transaction and skip duplicates per port.
    attach_ports(pool, &server, &mut record).await?;

    tracing::info!(
        record_id = record.record_id,
        created_at = %record.created_at,
        eth_ports = record.ethernet.len(),
        fc_ports = record.fibre_channel.len(),
        "Server created"
    );

    Ok(web::Json(RecordCreated {
        record_id: record.record_id,
    }))
}

/// Resolves the attribute ids the present sub-resources need, paired with
/// the values to write. A name missing from the dictionary is an
/// environment problem, not a user error.
async fn resolve_attribute_writes(
    pool: &PgPool,
    server: &models::NewServer,
) -> Result<Vec<(i32, Option<String>)>, ServerMgmtError> {
    let mut writes = Vec::new();

    if let Some(processor) = &server.processor {
        let attr_id = resolve_attribute(pool, db::dictionary::ATTR_CPU_TYPE_COUNT).await?;
        writes.push((
            attr_id,
            Some(format!("{} / {}", processor.model, processor.count)),
        ));

        let attr_id = resolve_attribute(pool, db::dictionary::ATTR_CPU_FREQ).await?;
        writes.push((attr_id, processor.freq.map(|freq| freq.to_string())));
    }

    if let Some(memory_gb) = server.memory_gb {
        let attr_id = resolve_attribute(pool, db::dictionary::ATTR_MEMORY).await?;
        writes.push((attr_id, Some(memory_gb.to_string())));
    }

    Ok(writes)
}

async fn resolve_attribute(pool: &PgPool, name: &str) -> Result<i32, ServerMgmtError> {
    db::dictionary::attribute_id(pool, name)
        .await
        .map_err(|_| ServerMgmtError::Persistence)?
        .ok_or_else(|| ServerMgmtError::TypeResolution(name.to_string()))
}

/// The transactional phase: object row, attribute values, IP bindings.
/// The caller commits on Ok and rolls back on Err.
async fn persist_server(
    tx: &mut Transaction<'_, Postgres>,
    server: &models::NewServer,
    objtype_id: i32,
    attr_writes: &[(i32, Option<String>)],
) -> Result<models::ServerRecord, ServerMgmtError> {
    let (record_id, created_at) = db::object::insert(
        tx,
        &server.common_name,
        &server.visible_label,
        objtype_id,
        "",
    )
    .await
    .map_err(|err| match err {
        db::StoreError::Duplicate => ServerMgmtError::DuplicateObject,
        db::StoreError::Database(_) => ServerMgmtError::Persistence,
    })?;

    for (attr_id, value) in attr_writes {
        db::attribute::set_value(tx, record_id, *attr_id, value.as_deref())
            .await
            .map_err(|_| ServerMgmtError::Persistence)?;
    }

    for interface in &server.interfaces {
        db::ip::bind_to_object(
            tx,
            &interface.addr,
            record_id,
            &interface.name,
            db::ip::BIND_TYPE_REGULAR,
        )
        .await
        .map_err(|_| ServerMgmtError::Persistence)?;
    }

    Ok(models::ServerRecord {
        record_id,
        created_at,
        common_name: server.common_name.clone(),
        visible_label: server.visible_label.clone(),
        processor: server.processor.clone(),
        memory_gb: server.memory_gb,
        interfaces: server.interfaces.clone(),
        ethernet: Vec::new(),
        fibre_channel: Vec::new(),
    })
}

/// Best-effort port attachment. A duplicate port is skipped and logged;
/// any other store failure still surfaces as a persistence error even
/// though the object has already been committed.
async fn attach_ports(
    pool: &PgPool,
    server: &models::NewServer,
    record: &mut models::ServerRecord,
) -> Result<(), ServerMgmtError> {
    if !server.ethernet.is_empty() {
        // The object id is brand new; clear any port rows recorded under it.
        db::port::delete_for_object(pool, record.record_id)
            .await
            .map_err(|_| ServerMgmtError::Persistence)?;

        for port in &server.ethernet {
            match db::port::insert(
                pool,
                record.record_id,
                &port.name,
                db::port::ETHERNET_PORT_TYPE,
                "",
                &port.hwaddr,
            )
            .await
            {
                Ok(()) => record.ethernet.push(port.clone()),
                Err(db::StoreError::Duplicate) => {
                    tracing::warn!(name = %port.name, "Skipping duplicate Ethernet port");
                }
                Err(db::StoreError::Database(err)) => {
                    tracing::error!("Failed to insert Ethernet port: {:?}", err);
                    return Err(ServerMgmtError::Persistence);
                }
            }
        }
    }

    for port in &server.fibre_channel {
        match db::port::insert(
            pool,
            record.record_id,
            &port.name,
            db::port::FIBRE_CHANNEL_PORT_TYPE,
            "",
            &port.wwn,
        )
        .await
        {
            Ok(()) => record.fibre_channel.push(port.clone()),
            Err(db::StoreError::Duplicate) => {
                tracing::warn!(name = %port.name, "Skipping duplicate Fibre Channel port");
            }
            Err(db::StoreError::Database(err)) => {
                tracing::error!("Failed to insert Fibre Channel port: {:?}", err);
                return Err(ServerMgmtError::Persistence);
            }
        }
    }

    Ok(())
}
