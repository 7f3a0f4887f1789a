use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};
use std::net::IpAddr;

/// Normalized processor description. `model` falls back to "Unknown",
/// `freq` survives only when strictly positive, `count` is zero unless
/// strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Processor {
    pub model: String,
    pub freq: Option<f64>,
    pub count: i64,
}

/// A named network interface with its parsed address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    pub addr: IpAddr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthernetPort {
    pub name: String,
    pub hwaddr: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FibreChannelPort {
    pub name: String,
    pub wwn: String,
}

/// Fully validated input of the create-server workflow. Produced by
/// `forms::server::ServerForm::normalize`; everything in here is safe to
/// hand to the store layer as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewServer {
    pub common_name: String,
    pub visible_label: String,
    pub processor: Option<Processor>,
    pub memory_gb: Option<i64>,
    pub interfaces: Vec<Interface>,
    pub ethernet: Vec<EthernetPort>,
    pub fibre_channel: Vec<FibreChannelPort>,
}

/// The created object together with everything that was attached to it.
/// `ethernet` and `fibre_channel` hold only the ports that were actually
/// added; duplicates skipped in the best-effort phase are absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerRecord {
    pub record_id: i32,
    pub created_at: DateTime<Utc>,
    pub common_name: String,
    pub visible_label: String,
    pub processor: Option<Processor>,
    pub memory_gb: Option<i64>,
    pub interfaces: Vec<Interface>,
    pub ethernet: Vec<EthernetPort>,
    pub fibre_channel: Vec<FibreChannelPort>,
}
