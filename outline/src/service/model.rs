//! Request and response shapes exchanged with the invoking gateway.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::ServiceError;

/// Message carried by every successful response.
pub const SUCCESS_MESSAGE: &str = "Success.";

/// A deployed application as reported to callers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
    pub description: String,
    pub stack: Stack,
}

/// The stack currently backing an application, if any.
///
/// All fields are empty when no matching stack exists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    pub name: String,
    pub status: String,
    pub url: String,
}

/// JSON body returned to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub message: String,
    /// `null` unless the response is a listing.
    #[serde(rename = "applicationList", default)]
    pub application_list: Option<Vec<Application>>,
}

impl ApiResponse {
    pub fn success(application_list: Option<Vec<Application>>) -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            application_list,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            application_list: None,
        }
    }
}

/// Operation requested through the `action` key of the body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Status,
    Create { name: String },
    Delete { name: String },
}

impl Action {
    /// Parses a body of the form `{"action": "...", "name": "..."}`.
    ///
    /// `name` is required for `create` and `delete` and ignored for `status`.
    pub fn parse(body: &str) -> Result<Self, ServiceError> {
        let mut fields: HashMap<String, String> = serde_json::from_str(body)?;
        let action = fields.remove("action").ok_or(ServiceError::MissingAction)?;
        let mut name = |action: &'static str| {
            fields
                .remove("name")
                .filter(|name| !name.is_empty())
                .ok_or(ServiceError::MissingName(action))
        };

        match action.as_str() {
            "status" => Ok(Self::Status),
            "create" => Ok(Self::Create {
                name: name("create")?,
            }),
            "delete" => Ok(Self::Delete {
                name: name("delete")?,
            }),
            _ => Err(ServiceError::UnsupportedAction(action)),
        }
    }
}

/// Incoming gateway request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Request {
    pub body: String,
    /// Caller address as seen by the gateway.
    pub source_ip: Option<String>,
}

impl Request {
    pub fn new<B: Into<String>>(body: B) -> Self {
        Self {
            body: body.into(),
            source_ip: None,
        }
    }

    pub fn with_source_ip<S: Into<String>>(mut self, source_ip: S) -> Self {
        self.source_ip = Some(source_ip.into());
        self
    }
}

/// Outgoing gateway response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

impl Response {
    /// Serializes `payload` as the JSON body.
    pub fn json(status_code: u16, payload: &ApiResponse) -> Self {
        let body = serde_json::to_string(payload)
            .unwrap_or_else(|err| format!("{{\"message\":{:?}}}", err.to_string()));
        Self { status_code, body }
    }

    pub fn from_error(err: &ServiceError) -> Self {
        Self::json(err.status_code(), &ApiResponse::failure(err.to_string()))
    }
}
