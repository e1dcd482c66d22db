//! Request handling for the application orchestration service.
//!
//! The handler owns its remote clients and logger; nothing is global. Every
//! remote shape it logs goes through its derived `slog::Value`, so sensitive
//! attributes such as presigned template URLs reach the log as the
//! redaction marker only.

use chrono::{DateTime, Utc};
use slog::{debug, error, info, warn, Logger};

use super::{
    config::Config,
    error::{RemoteError, ServiceError},
    model::{Action, ApiResponse, Application, Request, Response, Stack},
    remote::{ApplicationRepository, Capability, CreateStackRequest, StackService, StackStatus},
};
use crate::string_value;

/// Stack states reported by a status listing.
pub const LISTED_STACK_STATUSES: [StackStatus; 3] = [
    StackStatus::CreateComplete,
    StackStatus::CreateInProgress,
    StackStatus::DeleteInProgress,
];

/// Resource type whose physical id names the application's HTTP API.
pub const HTTP_API_RESOURCE_TYPE: &str = "AWS::ApiGatewayV2::Api";

const STACK_NAME_TIMESTAMP: &str = "%Y%m%d%H%M%S%3f";

/// Builds the name of a new stack for `application` launched at `at`.
///
/// The suffix is the UTC timestamp down to milliseconds, digits only.
pub fn stack_name(application: &str, at: DateTime<Utc>) -> String {
    format!("{application}{}", at.format(STACK_NAME_TIMESTAMP))
}

/// Serves `status`, `create` and `delete` requests against injected clients.
pub struct Handler<R, S> {
    repository: R,
    stacks: S,
    config: Config,
    logger: Logger,
    clock: fn() -> DateTime<Utc>,
}

impl<R, S> Handler<R, S>
where
    R: ApplicationRepository,
    S: StackService,
{
    pub fn new(repository: R, stacks: S, config: Config, logger: Logger) -> Self {
        Self {
            repository,
            stacks,
            config,
            logger,
            clock: Utc::now,
        }
    }

    /// Replaces the clock used to timestamp new stack names.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handles one gateway request. Never fails; errors become responses.
    pub fn handle(&self, request: &Request) -> Response {
        info!(self.logger, "request received";
            "source_ip" => request.source_ip.as_deref().unwrap_or("unknown"));

        match self.dispatch(&request.body) {
            Ok(payload) => Response::json(200, &payload),
            Err(err) => {
                error!(self.logger, "request failed";
                    "status" => err.status_code(), "error" => %err);
                Response::from_error(&err)
            }
        }
    }

    fn dispatch(&self, body: &str) -> Result<ApiResponse, ServiceError> {
        match Action::parse(body)? {
            Action::Status => {
                // An empty listing goes out as `null`, like any non-listing reply.
                let applications = self.applications()?;
                Ok(ApiResponse::success(
                    (!applications.is_empty()).then_some(applications),
                ))
            }
            Action::Create { name } => {
                self.create_stack(&name)?;
                Ok(ApiResponse::success(None))
            }
            Action::Delete { name } => {
                self.delete_stack(&name)?;
                Ok(ApiResponse::success(None))
            }
        }
    }

    /// Lists published applications with the stack currently backing each.
    pub fn applications(&self) -> Result<Vec<Application>, ServiceError> {
        let summaries = self.repository.list_applications()?;
        let mut applications: Vec<Application> = summaries
            .iter()
            .map(|summary| {
                debug!(self.logger, "application listed"; "application" => summary);
                Application {
                    name: string_value(&summary.name),
                    description: string_value(&summary.description),
                    stack: Stack::default(),
                }
            })
            .collect();
        self.attach_stacks(&mut applications)?;
        Ok(applications)
    }

    fn attach_stacks(&self, applications: &mut [Application]) -> Result<(), ServiceError> {
        for summary in self.stacks.list_stacks(&LISTED_STACK_STATUSES)? {
            debug!(self.logger, "stack listed"; "stack" => &summary);
            let name = string_value(&summary.stack_name);
            let Some(application) = applications
                .iter_mut()
                .find(|application| name.starts_with(application.name.as_str()))
            else {
                continue;
            };

            let url = if summary.stack_status == StackStatus::CreateComplete {
                match self.stack_url(&name) {
                    Ok(url) => url,
                    Err(err) => {
                        warn!(self.logger, "stack resources unavailable";
                            "stack" => &name, "error" => %err);
                        continue;
                    }
                }
            } else {
                String::new()
            };

            application.stack = Stack {
                name,
                status: summary.stack_status.to_string(),
                url,
            };
        }
        Ok(())
    }

    /// Invoke URL of the HTTP API owned by `stack_name`; empty when it has none.
    fn stack_url(&self, stack_name: &str) -> Result<String, RemoteError> {
        let resources = self.stacks.list_stack_resources(stack_name)?;
        Ok(resources
            .iter()
            .rev()
            .find(|resource| string_value(&resource.resource_type) == HTTP_API_RESOURCE_TYPE)
            .map(|resource| {
                self.config
                    .api_endpoint(&string_value(&resource.physical_resource_id))
            })
            .unwrap_or_default())
    }

    /// Resolves the catalog id of the application called `name`.
    pub fn application_id(&self, name: &str) -> Result<String, ServiceError> {
        self.repository
            .list_applications()?
            .iter()
            .find(|summary| string_value(&summary.name) == name)
            .map(|summary| string_value(&summary.application_id))
            .ok_or_else(|| ServiceError::ApplicationNotFound(name.to_string()))
    }

    /// Generates a deployable template and returns its presigned URL.
    pub fn template_url(&self, application_id: &str) -> Result<String, ServiceError> {
        let template = self
            .repository
            .create_cloud_formation_template(application_id)?;
        debug!(self.logger, "template created"; "template" => &template);
        let url = string_value(&template.template_url);
        if url.is_empty() {
            return Err(RemoteError::new(
                "CreateCloudFormationTemplate",
                "response carried no template URL",
            )
            .into());
        }
        Ok(url)
    }

    /// Launches a new stack for the application called `name`.
    ///
    /// Returns the generated stack name.
    pub fn create_stack(&self, name: &str) -> Result<String, ServiceError> {
        let application_id = self.application_id(name)?;
        let template_url = self.template_url(&application_id)?;
        let request = CreateStackRequest {
            stack_name: stack_name(name, (self.clock)()),
            template_url,
            capabilities: vec![Capability::Iam, Capability::AutoExpand],
        };
        info!(self.logger, "creating stack"; "request" => &request);
        self.stacks.create_stack(&request)?;
        Ok(request.stack_name)
    }

    /// Deletes the stack called `name`.
    pub fn delete_stack(&self, name: &str) -> Result<(), ServiceError> {
        info!(self.logger, "deleting stack"; "stack" => name);
        self.stacks.delete_stack(name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::stack_name;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap() + chrono::Duration::milliseconds(6)
    }

    #[test]
    fn stack_name_appends_millisecond_timestamp() {
        assert_eq!(stack_name("todo-api", at()), "todo-api20240102030405006");
    }

    #[test]
    fn stack_name_keeps_application_prefix() {
        let name = stack_name("web", at());
        assert!(name.starts_with("web"));
        assert_eq!(name.len(), "web".len() + 17);
    }
}
