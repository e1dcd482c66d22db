//! Remote API shapes and the client interfaces the handler depends on.
//!
//! The shapes mirror what an SDK hands back: nearly every attribute is
//! optional. They derive [`Outline`] so the handler can log them in redacted
//! form and read single attributes with [`crate::string_value`].

use std::fmt;

use crate::{Outline, Value};

use super::error::RemoteError;

/// An application published in the application catalog.
#[derive(Clone, Default, PartialEq, Eq, Outline)]
pub struct ApplicationSummary {
    pub application_id: Option<String>,
    pub author: Option<String>,
    pub creation_time: Option<String>,
    pub description: Option<String>,
    pub home_page_url: Option<String>,
    pub labels: Vec<String>,
    pub name: Option<String>,
    pub spdx_license_id: Option<String>,
}

/// A deployable template generated for an application.
#[derive(Clone, Default, PartialEq, Eq, Outline)]
pub struct TemplateSummary {
    pub application_id: Option<String>,
    pub template_id: Option<String>,
    /// Presigned; the query string carries temporary credentials.
    #[outline(sensitive)]
    pub template_url: Option<String>,
    pub status: Option<String>,
}

/// One stack as returned by a stack listing.
#[derive(Clone, PartialEq, Eq, Outline)]
pub struct StackSummary {
    pub stack_id: Option<String>,
    pub stack_name: Option<String>,
    pub stack_status: StackStatus,
    pub stack_status_reason: Option<String>,
    pub template_description: Option<String>,
}

/// One resource owned by a stack.
#[derive(Clone, Default, PartialEq, Eq, Outline)]
pub struct StackResourceSummary {
    pub logical_resource_id: Option<String>,
    pub physical_resource_id: Option<String>,
    pub resource_type: Option<String>,
    pub resource_status: Option<String>,
}

/// Everything needed to launch a stack from a template.
#[derive(Clone, PartialEq, Eq, Outline)]
pub struct CreateStackRequest {
    pub stack_name: String,
    #[outline(sensitive)]
    pub template_url: String,
    pub capabilities: Vec<Capability>,
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Wire name of the value.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Outline for $name {
            fn outline(&self) -> Value {
                Value::literal(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Lifecycle state of a stack.
    pub enum StackStatus {
        CreateInProgress => "CREATE_IN_PROGRESS",
        CreateFailed => "CREATE_FAILED",
        CreateComplete => "CREATE_COMPLETE",
        RollbackInProgress => "ROLLBACK_IN_PROGRESS",
        RollbackFailed => "ROLLBACK_FAILED",
        RollbackComplete => "ROLLBACK_COMPLETE",
        DeleteInProgress => "DELETE_IN_PROGRESS",
        DeleteFailed => "DELETE_FAILED",
        DeleteComplete => "DELETE_COMPLETE",
        UpdateInProgress => "UPDATE_IN_PROGRESS",
        UpdateComplete => "UPDATE_COMPLETE",
        UpdateRollbackComplete => "UPDATE_ROLLBACK_COMPLETE",
    }
}

wire_enum! {
    /// Acknowledgement required for templates that create sensitive resources.
    pub enum Capability {
        Iam => "CAPABILITY_IAM",
        NamedIam => "CAPABILITY_NAMED_IAM",
        AutoExpand => "CAPABILITY_AUTO_EXPAND",
    }
}

/// Application catalog client.
pub trait ApplicationRepository {
    fn list_applications(&self) -> Result<Vec<ApplicationSummary>, RemoteError>;

    fn create_cloud_formation_template(
        &self,
        application_id: &str,
    ) -> Result<TemplateSummary, RemoteError>;
}

/// Stack lifecycle client.
pub trait StackService {
    /// Lists stacks whose status is in `filter`.
    fn list_stacks(&self, filter: &[StackStatus]) -> Result<Vec<StackSummary>, RemoteError>;

    fn list_stack_resources(
        &self,
        stack_name: &str,
    ) -> Result<Vec<StackResourceSummary>, RemoteError>;

    fn create_stack(&self, request: &CreateStackRequest) -> Result<(), RemoteError>;

    fn delete_stack(&self, stack_name: &str) -> Result<(), RemoteError>;
}

impl<T> ApplicationRepository for &T
where
    T: ApplicationRepository + ?Sized,
{
    fn list_applications(&self) -> Result<Vec<ApplicationSummary>, RemoteError> {
        (**self).list_applications()
    }

    fn create_cloud_formation_template(
        &self,
        application_id: &str,
    ) -> Result<TemplateSummary, RemoteError> {
        (**self).create_cloud_formation_template(application_id)
    }
}

impl<T> StackService for &T
where
    T: StackService + ?Sized,
{
    fn list_stacks(&self, filter: &[StackStatus]) -> Result<Vec<StackSummary>, RemoteError> {
        (**self).list_stacks(filter)
    }

    fn list_stack_resources(
        &self,
        stack_name: &str,
    ) -> Result<Vec<StackResourceSummary>, RemoteError> {
        (**self).list_stack_resources(stack_name)
    }

    fn create_stack(&self, request: &CreateStackRequest) -> Result<(), RemoteError> {
        (**self).create_stack(request)
    }

    fn delete_stack(&self, stack_name: &str) -> Result<(), RemoteError> {
        (**self).delete_stack(stack_name)
    }
}
