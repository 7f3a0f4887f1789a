use crate::errors::ServerMgmtError;
use crate::models;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

lazy_static! {
    // Colon- or hyphen-separated octet pairs, or Cisco dotted quads.
    static ref MAC_RE: Regex = Regex::new(
        r"(?i)^(?:[0-9a-f]{2}(?::[0-9a-f]{2}){5}|[0-9a-f]{2}(?:-[0-9a-f]{2}){5}|[0-9a-f]{4}(?:\.[0-9a-f]{4}){2})$"
    )
    .unwrap();
    // Exactly eight colon-separated hex octets.
    static ref WWN_RE: Regex = Regex::new(r"(?i)^[0-9a-f]{2}(?::[0-9a-f]{2}){7}$").unwrap();
}

/// Wire form of `POST /server`. All fields but the two names are
/// optional; sub-resource entries are filtered down to the valid ones by
/// [`ServerForm::normalize`] rather than rejected wholesale.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerForm {
    pub common_name: Option<String>,
    pub visible_label: Option<String>,
    pub proc: Option<ProcessorForm>,
    pub mem: Option<MemoryForm>,
    // `if` on the wire
    #[serde(rename = "if")]
    pub interfaces: Option<Vec<InterfaceForm>>,
    pub eth: Option<Vec<EthernetPortForm>>,
    pub fc: Option<Vec<FibreChannelPortForm>>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessorForm {
    pub model: Option<String>,
    pub freq: Option<f64>,
    pub count: Option<f64>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryForm {
    /// Size in MiB as reported by the host
    pub size: Option<f64>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceForm {
    pub name: Option<String>,
    pub addr: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthernetPortForm {
    pub name: Option<String>,
    pub hwaddr: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FibreChannelPortForm {
    pub name: Option<String>,
    pub wwn: Option<String>,
}

impl ServerForm {
    /// Turns the raw form into a validated [`models::NewServer`].
    ///
    /// Only the two required top-level fields can fail the request;
    /// malformed sub-resource entries are dropped one by one.
    pub fn normalize(&self) -> Result<models::NewServer, ServerMgmtError> {
        let common_name = required_field(&self.common_name, "common_name")?;
        let visible_label = required_field(&self.visible_label, "visible_label")?;

        Ok(models::NewServer {
            common_name,
            visible_label,
            processor: self.proc.as_ref().map(normalize_processor),
            memory_gb: self.mem.as_ref().map(normalize_memory),
            interfaces: self
                .interfaces
                .as_deref()
                .map(normalize_interfaces)
                .unwrap_or_default(),
            ethernet: self.eth.as_deref().map(normalize_ethernet).unwrap_or_default(),
            fibre_channel: self
                .fc
                .as_deref()
                .map(normalize_fibre_channel)
                .unwrap_or_default(),
        })
    }
}

fn required_field(
    value: &Option<String>,
    field: &'static str,
) -> Result<String, ServerMgmtError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(ServerMgmtError::MissingField(field))
}

pub fn normalize_processor(raw: &ProcessorForm) -> models::Processor {
    let model = match raw.model.as_deref().map(str::trim) {
        Some(model) if !model.is_empty() => model.to_string(),
        _ => "Unknown".to_string(),
    };

    models::Processor {
        model,
        freq: raw.freq.filter(|freq| *freq > 0.0),
        count: raw
            .count
            .filter(|count| *count > 0.0)
            .map(|count| count as i64)
            .unwrap_or(0),
    }
}

/// MiB to GiB. Rounds half away from zero; a size that is absent or not
/// strictly positive normalizes to zero.
pub fn normalize_memory(raw: &MemoryForm) -> i64 {
    match raw.size.filter(|size| *size > 0.0) {
        Some(size) => (size / 1024.0).round() as i64,
        None => 0,
    }
}

pub fn normalize_interfaces(raw: &[InterfaceForm]) -> Vec<models::Interface> {
    raw.iter()
        .filter_map(|entry| {
            let name = entry
                .name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())?;
            let addr: IpAddr = entry.addr.as_deref()?.parse().ok()?;
            Some(models::Interface {
                name: name.to_string(),
                addr,
            })
        })
        .collect()
}

pub fn normalize_ethernet(raw: &[EthernetPortForm]) -> Vec<models::EthernetPort> {
    raw.iter()
        .filter_map(|entry| {
            let name = entry
                .name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())?;
            let hwaddr = entry.hwaddr.as_deref().filter(|addr| MAC_RE.is_match(addr))?;
            Some(models::EthernetPort {
                name: name.to_string(),
                hwaddr: hwaddr.trim().to_string(),
            })
        })
        .collect()
}

pub fn normalize_fibre_channel(raw: &[FibreChannelPortForm]) -> Vec<models::FibreChannelPort> {
    raw.iter()
        .filter_map(|entry| {
            let name = entry
                .name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())?;
            let wwn = entry.wwn.as_deref().filter(|wwn| WWN_RE.is_match(wwn))?;
            Some(models::FibreChannelPort {
                name: name.to_string(),
                wwn: wwn.trim().to_string(),
            })
        })
        .collect()
}
