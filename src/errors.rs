use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;

/// Errors surfaced to the caller of the server-creation endpoint
#[derive(Debug)]
pub enum ServerMgmtError {
    /// A required top-level field is absent or blank
    MissingField(&'static str),
    /// An object-type or attribute name has no id in the inventory
    /// dictionary. The environment is misconfigured.
    TypeResolution(String),
    /// An object with the same name already exists
    DuplicateObject,
    /// Any other database failure
    Persistence,
}

impl fmt::Display for ServerMgmtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => {
                write!(f, "Field '{}' is required to create a server", field)
            }
            Self::TypeResolution(name) => {
                write!(f, "Unable to resolve id for dictionary entry '{}'", name)
            }
            Self::DuplicateObject => write!(f, "An object with this name already exists"),
            Self::Persistence => write!(f, "Failed to add the object to the database"),
        }
    }
}

impl ResponseError for ServerMgmtError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField(_) => StatusCode::BAD_REQUEST,
            Self::TypeResolution(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::DuplicateObject => StatusCode::CONFLICT,
            Self::Persistence => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
