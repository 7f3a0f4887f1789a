use serde_derive::Serialize;

/// Success body of the create-server endpoint.
#[derive(Serialize)]
pub struct RecordCreated {
    pub record_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_is_a_single_record_id_field() {
        let body = serde_json::to_value(RecordCreated { record_id: 4077 }).unwrap();
        assert_eq!(body, serde_json::json!({"record_id": 4077}));
    }
}
