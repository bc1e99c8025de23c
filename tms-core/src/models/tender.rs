use super::{DateTime, OrganizationId, TenderId, Version, Versioned, text_enum};
use serde::{Deserialize, Serialize};

text_enum!(
    /// The publication state of a tender
    TenderStatus, "tender status" {
        /// Visible only to the organization's responsible employees
        Created,
        /// Visible to everyone and open for bids
        Published,
        /// No longer accepting bids
        Closed,
    }
);

text_enum!(
    /// The kind of service a tender procures
    TenderServiceType, "service type" {
        /// Construction works
        Construction,
        /// Delivery of goods
        Delivery,
        /// Manufacturing of goods
        Manufacture,
    }
);

/// The current state of a tender
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenderRecord {
    /// A unique id for the tender
    pub id: TenderId,
    /// The title of the tender
    pub name: String,
    /// What is being procured
    pub description: String,
    /// The publication state
    pub status: TenderStatus,
    /// The kind of service being procured
    pub service_type: TenderServiceType,
    /// Incremented on every edit
    pub version: Version,
    /// The organization publishing the tender
    pub organization_id: OrganizationId,
    /// The username of the employee that created the tender
    pub creator_username: String,
    /// The server time at which the tender was created
    pub created_at: DateTime,
    /// The server time of the latest edit
    pub updated_at: DateTime,
}

/// The data required to create a tender. New tenders are always created at
/// [`Version::INITIAL`] in the [`TenderStatus::Created`] state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTender {
    /// The title of the tender
    pub name: String,
    /// What is being procured
    pub description: String,
    /// The kind of service being procured
    pub service_type: TenderServiceType,
    /// The organization publishing the tender
    pub organization_id: OrganizationId,
    /// The username of the employee creating the tender
    pub creator_username: String,
}

/// A partial edit of a tender. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TenderPatch {
    /// A new title
    pub name: Option<String>,
    /// A new description
    pub description: Option<String>,
    /// A new publication state
    pub status: Option<TenderStatus>,
    /// A new service type
    pub service_type: Option<TenderServiceType>,
}

impl Versioned for TenderRecord {
    type Patch = TenderPatch;

    fn version(&self) -> Version {
        self.version
    }

    fn apply(&mut self, patch: TenderPatch, as_of: DateTime) {
        let TenderPatch {
            name,
            description,
            status,
            service_type,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(service_type) = service_type {
            self.service_type = service_type;
        }

        self.version = self.version.next();
        self.updated_at = as_of;
    }

    fn restore(&self) -> TenderPatch {
        TenderPatch {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            status: Some(self.status),
            service_type: Some(self.service_type),
        }
    }
}
