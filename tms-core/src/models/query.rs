//! Typed filters for list queries.
//!
//! Every list query is a fixed set of optional filters, an optional ordering
//! and a page. A filter is either an equality test or a set-membership test;
//! an absent filter does not restrict the results.

use super::{AuthorId, BidId, BidStatus, OrganizationId, TenderId, TenderServiceType, TenderStatus};

/// A restriction on a single column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter<T> {
    /// The column equals the value
    Eq(T),
    /// The column is one of the values. An empty set matches nothing.
    In(Vec<T>),
}

/// A single-element set degrades to an equality test.
impl<T> From<Vec<T>> for Filter<T> {
    fn from(values: Vec<T>) -> Self {
        match <[T; 1]>::try_from(values) {
            Ok([value]) => Self::Eq(value),
            Err(values) => Self::In(values),
        }
    }
}

/// Sort direction
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

/// Sort the results by `field` in `direction`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordering<F> {
    /// The column to sort by
    pub field: F,
    /// The sort direction
    pub direction: Direction,
}

impl<F> Ordering<F> {
    /// Sort by `field`, smallest first
    pub fn ascending(field: F) -> Self {
        Self {
            field,
            direction: Direction::Ascending,
        }
    }

    /// Sort by `field`, largest first
    pub fn descending(field: F) -> Self {
        Self {
            field,
            direction: Direction::Descending,
        }
    }
}

/// Offset pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// The maximum number of results
    pub limit: u32,
    /// The number of results to skip
    pub offset: u32,
}

impl Page {
    /// The page size used when a request does not name one
    pub const DEFAULT_LIMIT: u32 = 5;

    /// Every result, in one page
    pub const ALL: Self = Self {
        limit: u32::MAX,
        offset: 0,
    };
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// The filters available when listing tenders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TenderQuery {
    /// Restrict the publication state
    pub status: Option<Filter<TenderStatus>>,
    /// Restrict the service type
    pub service_type: Option<Filter<TenderServiceType>>,
    /// Restrict the publishing organization
    pub organization_id: Option<Filter<OrganizationId>>,
    /// Restrict the creating employee
    pub creator_username: Option<Filter<String>>,
}

/// The orderable tender columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenderOrder {
    /// The tender title
    Name,
    /// The creation time
    CreatedAt,
}

/// The filters available when listing bids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BidQuery {
    /// Restrict the publication state
    pub status: Option<Filter<BidStatus>>,
    /// Restrict the tender
    pub tender_id: Option<Filter<TenderId>>,
    /// Restrict the author
    pub author_id: Option<Filter<AuthorId>>,
}

/// The orderable bid columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidOrder {
    /// The bid title
    Name,
    /// The creation time
    CreatedAt,
}

/// The filters available when listing feedback
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackQuery {
    /// Restrict the reviewed bid
    pub bid_id: Option<Filter<BidId>>,
}

/// The orderable feedback columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackOrder {
    /// The time the feedback was left
    CreatedAt,
}
