use super::{DateTime, EmployeeId, OrganizationId, ResponsibleId, text_enum};
use serde::{Deserialize, Serialize};

text_enum!(
    /// The legal form of an organization
    #[allow(clippy::upper_case_acronyms)]
    OrganizationKind, "organization type" {
        /// Individual entrepreneur
        IE,
        /// Limited liability company
        LLC,
        /// Joint-stock company
        JSC,
    }
);

/// An employee, identified by a unique username.
///
/// Employees are the only notion of identity in the system: requests name
/// the acting employee by username.
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// A unique id for the employee
    pub id: EmployeeId,
    /// The unique login name of the employee
    pub username: String,
    /// The employee's first name, if known
    pub first_name: Option<String>,
    /// The employee's last name, if known
    pub last_name: Option<String>,
    /// When the employee was registered
    pub created_at: DateTime,
    /// When the employee was last modified
    pub updated_at: DateTime,
}

/// The data required to register an employee
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// The unique login name of the employee
    pub username: String,
    /// The employee's first name
    #[serde(default)]
    pub first_name: Option<String>,
    /// The employee's last name
    #[serde(default)]
    pub last_name: Option<String>,
}

/// An organization that publishes tenders and may author bids.
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationRecord {
    /// A unique id for the organization
    pub id: OrganizationId,
    /// The display name of the organization
    pub name: String,
    /// A free-form description
    pub description: Option<String>,
    /// The legal form of the organization
    #[serde(rename = "type")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "type"))]
    pub kind: Option<OrganizationKind>,
    /// When the organization was registered
    pub created_at: DateTime,
    /// When the organization was last modified
    pub updated_at: DateTime,
}

/// The data required to register an organization
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrganization {
    /// The display name of the organization
    pub name: String,
    /// A free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// The legal form of the organization
    #[serde(default, rename = "type")]
    pub kind: Option<OrganizationKind>,
}

/// Records that an employee is responsible for (may act on behalf of) an
/// organization. This link is the only authorization fact for
/// organization-scoped actions.
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsibleRecord {
    /// A unique id for the link
    pub id: ResponsibleId,
    /// The organization
    pub organization_id: OrganizationId,
    /// The responsible employee
    pub user_id: EmployeeId,
}
