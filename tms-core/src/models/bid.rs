use super::{AuthorId, BidId, DateTime, EmployeeId, OrganizationId, TenderId, Version, Versioned, text_enum};
use serde::{Deserialize, Serialize};

text_enum!(
    /// The publication state of a bid
    BidStatus, "bid status" {
        /// Visible only to its author
        Created,
        /// Submitted to the tender's organization
        Published,
        /// Withdrawn by its author
        Canceled,
    }
);

text_enum!(
    /// Who authored a bid, which determines what [`AuthorId`] refers to
    AuthorType, "author type" {
        /// The author id is an organization id
        Organization,
        /// The author id is an employee id
        User,
    }
);

text_enum!(
    /// The tender organization's verdict on a bid
    DecisionStatus, "decision status" {
        /// The bid was accepted
        Approved,
        /// The bid was turned down
        Rejected,
        /// No decision has been made yet
        Pending,
    }
);

/// The current state of a bid
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidRecord {
    /// A unique id for the bid
    pub id: BidId,
    /// The title of the bid
    pub name: String,
    /// What is being offered
    pub description: String,
    /// The publication state
    pub status: BidStatus,
    /// The tender this bid answers
    pub tender_id: TenderId,
    /// Whether the author is an employee or an organization
    pub author_type: AuthorType,
    /// The employee or organization that authored the bid
    pub author_id: AuthorId,
    /// Incremented on every edit
    pub version: Version,
    /// The tender organization's verdict
    pub decision_status: DecisionStatus,
    /// The server time at which the bid was created
    pub created_at: DateTime,
    /// The server time of the latest edit
    pub updated_at: DateTime,
}

impl BidRecord {
    /// Whether the bid was authored personally by the given employee.
    pub fn is_owned_by(&self, employee_id: EmployeeId) -> bool {
        self.author_type == AuthorType::User && self.author_id.0 == employee_id.0
    }

    /// The authoring organization, for organization-authored bids.
    pub fn author_organization(&self) -> Option<OrganizationId> {
        match self.author_type {
            AuthorType::Organization => Some(OrganizationId(self.author_id.0)),
            AuthorType::User => None,
        }
    }
}

/// The data required to create a bid. New bids start at
/// [`Version::INITIAL`], [`BidStatus::Created`] and
/// [`DecisionStatus::Pending`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBid {
    /// The title of the bid
    pub name: String,
    /// What is being offered
    pub description: String,
    /// The tender this bid answers
    pub tender_id: TenderId,
    /// Whether the author is an employee or an organization
    pub author_type: AuthorType,
    /// The employee or organization authoring the bid
    pub author_id: AuthorId,
}

/// A partial edit of a bid. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BidPatch {
    /// A new title
    pub name: Option<String>,
    /// A new description
    pub description: Option<String>,
    /// A new publication state
    pub status: Option<BidStatus>,
    /// A new verdict
    pub decision_status: Option<DecisionStatus>,
}

impl Versioned for BidRecord {
    type Patch = BidPatch;

    fn version(&self) -> Version {
        self.version
    }

    fn apply(&mut self, patch: BidPatch, as_of: DateTime) {
        let BidPatch {
            name,
            description,
            status,
            decision_status,
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
        if let Some(decision_status) = decision_status {
            self.decision_status = decision_status;
        }

        self.version = self.version.next();
        self.updated_at = as_of;
    }

    // The verdict belongs to the tender's organization, not to the bid's
    // history, so rolling back leaves it alone.
    fn restore(&self) -> BidPatch {
        BidPatch {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            status: Some(self.status),
            decision_status: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bid(author_type: AuthorType, author_id: uuid::Uuid) -> BidRecord {
        let now = DateTime::now();
        BidRecord {
            id: BidId(uuid::Uuid::new_v4()),
            name: "Delivery by Alexey".to_owned(),
            description: "Any parcel for 100 rubles".to_owned(),
            status: BidStatus::Created,
            tender_id: TenderId(uuid::Uuid::new_v4()),
            author_type,
            author_id: AuthorId(author_id),
            version: Version::INITIAL,
            decision_status: DecisionStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn only_user_authored_bids_have_an_owner() {
        let id = uuid::Uuid::new_v4();

        let personal = bid(AuthorType::User, id);
        assert!(personal.is_owned_by(EmployeeId(id)));
        assert!(!personal.is_owned_by(EmployeeId(uuid::Uuid::new_v4())));
        assert_eq!(personal.author_organization(), None);

        let corporate = bid(AuthorType::Organization, id);
        assert!(!corporate.is_owned_by(EmployeeId(id)));
        assert_eq!(corporate.author_organization(), Some(OrganizationId(id)));
    }

    #[test]
    fn rollback_patch_leaves_the_decision_alone() {
        let snapshot = bid(AuthorType::User, uuid::Uuid::new_v4());
        let mut live = snapshot.clone();
        live.apply(
            BidPatch {
                description: Some("Now 200 rubles".to_owned()),
                decision_status: Some(DecisionStatus::Approved),
                ..Default::default()
            },
            DateTime::now(),
        );

        live.apply(snapshot.restore(), DateTime::now());

        assert_eq!(live.description, snapshot.description);
        assert_eq!(live.decision_status, DecisionStatus::Approved);
        assert_eq!(live.version.get(), 3);
    }
}
