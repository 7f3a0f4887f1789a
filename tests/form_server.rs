/// Wire-format tests for the server creation request
/// Run: cargo t form_server -- --nocapture --show-output
use racker::errors::ServerMgmtError;
use racker::forms::server::ServerForm;
use std::net::IpAddr;

#[test]
fn full_payload_deserializes_and_normalizes() {
    let json = r#"{
        "common_name": "web01.example.com",
        "visible_label": "web01",
        "proc": {"model": "Xeon Silver 4210", "freq": 2200, "count": 2},
        "mem": {"size": 65536},
        "if": [
            {"name": "eth0", "addr": "192.168.1.10"},
            {"name": "eth1", "addr": "2001:db8::10"}
        ],
        "eth": [
            {"name": "eth0", "hwaddr": "00:1b:44:11:3a:b7"}
        ],
        "fc": [
            {"name": "fc0", "wwn": "10:00:00:05:1e:0a:ab:cd"}
        ]
    }"#;

    let form: ServerForm = serde_json::from_str(json).unwrap();
    assert_eq!(form.common_name.as_deref(), Some("web01.example.com"));
    // `if` on the wire maps onto the interfaces list
    assert_eq!(form.interfaces.as_ref().map(Vec::len), Some(2));

    let server = form.normalize().unwrap();
    assert_eq!(server.common_name, "web01.example.com");
    assert_eq!(server.visible_label, "web01");
    assert_eq!(server.memory_gb, Some(64));

    let processor = server.processor.expect("processor spec should survive");
    assert_eq!(processor.model, "Xeon Silver 4210");
    assert_eq!(processor.freq, Some(2200.0));
    assert_eq!(processor.count, 2);

    assert_eq!(server.interfaces.len(), 2);
    assert_eq!(
        server.interfaces[0].addr,
        "192.168.1.10".parse::<IpAddr>().unwrap()
    );
    assert_eq!(server.ethernet.len(), 1);
    assert_eq!(server.fibre_channel.len(), 1);
    assert_eq!(server.fibre_channel[0].wwn, "10:00:00:05:1e:0a:ab:cd");
}

#[test]
fn minimal_payload_needs_only_the_two_names() {
    let json = r#"{"common_name": "db02.example.com", "visible_label": "db02"}"#;
    let form: ServerForm = serde_json::from_str(json).unwrap();
    let server = form.normalize().unwrap();

    assert!(server.processor.is_none());
    assert!(server.memory_gb.is_none());
    assert!(server.interfaces.is_empty());
    assert!(server.ethernet.is_empty());
    assert!(server.fibre_channel.is_empty());
}

#[test]
fn malformed_sub_resources_are_dropped_not_fatal() {
    let json = r#"{
        "common_name": "web02.example.com",
        "visible_label": "web02",
        "if": [
            {"name": "eth0", "addr": "192.168.1.1"},
            {"name": "bad", "addr": "not-an-ip"}
        ],
        "eth": [
            {"name": "eth0", "hwaddr": "00:1b:44:11:3a:b7"},
            {"name": "eth1", "hwaddr": "garbage"},
            {"name": "eth2"}
        ],
        "fc": [
            {"name": "fc0", "wwn": "10:00:00:05:1e:0a:ab"}
        ]
    }"#;

    let form: ServerForm = serde_json::from_str(json).unwrap();
    let server = form.normalize().unwrap();

    assert_eq!(server.interfaces.len(), 1);
    assert_eq!(server.interfaces[0].name, "eth0");
    assert_eq!(server.ethernet.len(), 1);
    assert_eq!(server.ethernet[0].hwaddr, "00:1b:44:11:3a:b7");
    // The seven-octet WWN is gone
    assert!(server.fibre_channel.is_empty());
}

#[test]
fn missing_required_fields_fail_normalization() {
    let json = r#"{"visible_label": "web01"}"#;
    let form: ServerForm = serde_json::from_str(json).unwrap();
    assert!(matches!(
        form.normalize(),
        Err(ServerMgmtError::MissingField("common_name"))
    ));

    let json = r#"{"common_name": "", "visible_label": "web01"}"#;
    let form: ServerForm = serde_json::from_str(json).unwrap();
    assert!(matches!(
        form.normalize(),
        Err(ServerMgmtError::MissingField("common_name"))
    ));
}

#[test]
fn unknown_fields_are_ignored() {
    let json = r#"{
        "common_name": "web03.example.com",
        "visible_label": "web03",
        "rack_position": 17
    }"#;
    let form: ServerForm = serde_json::from_str(json).unwrap();
    assert!(form.normalize().is_ok());
}
