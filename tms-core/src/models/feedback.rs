use super::{BidId, DateTime, FeedbackId};
use serde::{Deserialize, Serialize};

/// A review left on a bid by one of the tender organization's responsible
/// employees. Feedback is write-once: it is never edited nor archived.
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// A unique id for the feedback
    pub id: FeedbackId,
    /// The reviewed bid
    pub bid_id: BidId,
    /// The review itself
    pub description: String,
    /// The reviewing employee
    pub username: String,
    /// When the review was left
    pub created_at: DateTime,
}

/// The data required to leave feedback on a bid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFeedback {
    /// The reviewed bid
    pub bid_id: BidId,
    /// The review itself
    pub description: String,
    /// The reviewing employee
    pub username: String,
}
