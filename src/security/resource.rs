//! The closed resource and operation vocabulary.
//!
//! Names cross the management boundary as strings (JMX and CLI callers
//! don't link against these enums), so both types carry a strict parse:
//! an exact, case-sensitive match against the canonical names, with a
//! typed error for anything else. Free-form strings never travel past
//! this boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::SecurityError;

/// What kind of resource a management operation targets.
///
/// `Null` is an explicit sentinel, not an absent value, so an operation
/// identity is always well-formed even when no resource was specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    /// No resource specified.
    Null,
    /// The cluster as a whole: topology, membership, runtime settings.
    Cluster,
    /// User data held in regions.
    Data,
    /// One member process.
    Member,
    /// One named region.
    Region,
}

impl Resource {
    /// All known resources, in declaration order.
    pub const ALL: [Resource; 5] = [
        Resource::Null,
        Resource::Cluster,
        Resource::Data,
        Resource::Member,
        Resource::Region,
    ];

    /// Canonical name of this resource.
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Null => "NULL",
            Resource::Cluster => "CLUSTER",
            Resource::Data => "DATA",
            Resource::Member => "MEMBER",
            Resource::Region => "REGION",
        }
    }

    /// Parse a canonical name. Exact and case-sensitive.
    pub fn parse(name: &str) -> Result<Self, SecurityError> {
        Resource::ALL
            .into_iter()
            .find(|resource| resource.name() == name)
            .ok_or_else(|| SecurityError::UnknownResource {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resource {
    type Err = SecurityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::parse(s)
    }
}

/// What a management operation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationCode {
    /// No operation specified.
    Null,
    /// Administer the target resource: change topology, start/stop.
    Manage,
    /// List the members of the cluster.
    ListMembers,
    /// Read metrics for the target resource.
    ShowMetrics,
    /// Change the alerting threshold.
    ChangeAlertLevel,
    /// Execute a CLI command string.
    ProcessCommand,
    /// Create a region.
    CreateRegion,
    /// Destroy a region.
    DestroyRegion,
    /// Rebalance data across members.
    Rebalance,
    /// Read a single entry.
    Get,
    /// Write a single entry.
    Put,
    /// Write a batch of entries.
    PutAll,
    /// Remove an entry.
    Remove,
    /// Run a query.
    Query,
    /// Export region data.
    ExportData,
    /// Import region data.
    ImportData,
    /// Shut a member or the cluster down.
    Shutdown,
}

impl OperationCode {
    /// All known operations, in declaration order.
    pub const ALL: [OperationCode; 17] = [
        OperationCode::Null,
        OperationCode::Manage,
        OperationCode::ListMembers,
        OperationCode::ShowMetrics,
        OperationCode::ChangeAlertLevel,
        OperationCode::ProcessCommand,
        OperationCode::CreateRegion,
        OperationCode::DestroyRegion,
        OperationCode::Rebalance,
        OperationCode::Get,
        OperationCode::Put,
        OperationCode::PutAll,
        OperationCode::Remove,
        OperationCode::Query,
        OperationCode::ExportData,
        OperationCode::ImportData,
        OperationCode::Shutdown,
    ];

    /// Canonical name of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            OperationCode::Null => "NULL",
            OperationCode::Manage => "MANAGE",
            OperationCode::ListMembers => "LIST_MEMBERS",
            OperationCode::ShowMetrics => "SHOW_METRICS",
            OperationCode::ChangeAlertLevel => "CHANGE_ALERT_LEVEL",
            OperationCode::ProcessCommand => "PROCESS_COMMAND",
            OperationCode::CreateRegion => "CREATE_REGION",
            OperationCode::DestroyRegion => "DESTROY_REGION",
            OperationCode::Rebalance => "REBALANCE",
            OperationCode::Get => "GET",
            OperationCode::Put => "PUT",
            OperationCode::PutAll => "PUT_ALL",
            OperationCode::Remove => "REMOVE",
            OperationCode::Query => "QUERY",
            OperationCode::ExportData => "EXPORT_DATA",
            OperationCode::ImportData => "IMPORT_DATA",
            OperationCode::Shutdown => "SHUTDOWN",
        }
    }

    /// Parse a canonical name. Exact and case-sensitive.
    pub fn parse(name: &str) -> Result<Self, SecurityError> {
        OperationCode::ALL
            .into_iter()
            .find(|operation| operation.name() == name)
            .ok_or_else(|| SecurityError::UnknownOperation {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for OperationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperationCode {
    type Err = SecurityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationCode::parse(s)
    }
}
