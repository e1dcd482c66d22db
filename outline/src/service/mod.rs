//! Orchestration service for deployed application stacks.
//!
//! Lists the applications published in a catalog together with the stack
//! currently backing each one, and creates or deletes stacks on request.
//! Remote APIs are reached through [`ApplicationRepository`] and
//! [`StackService`]; callers inject implementations.
//!
//! Remote values are read with [`crate::string_value`] and logged through
//! their derived `slog::Value`, so redaction rules declared on the remote
//! shapes apply to every log line.

mod config;
mod error;
mod handler;
mod model;
mod remote;

pub use config::{Config, REGION_VAR};
pub use error::{ConfigError, RemoteError, ServiceError};
pub use handler::{stack_name, Handler, HTTP_API_RESOURCE_TYPE, LISTED_STACK_STATUSES};
pub use model::{Action, ApiResponse, Application, Request, Response, Stack, SUCCESS_MESSAGE};
pub use remote::{
    ApplicationRepository, ApplicationSummary, Capability, CreateStackRequest, StackResourceSummary,
    StackService, StackStatus, StackSummary, TemplateSummary,
};
