use super::{BidRepository, DirectoryRepository, FeedbackRepository, Repository, TenderRepository};
use crate::models::{BidId, BidRecord, DateTime, EmployeeId, FeedbackId, OrganizationId, TenderId};

/// The error type of an application's repository
pub type RepositoryError<T> = <<T as Application>::Repository as Repository>::Error;

/// The integration point between the endpoint logic and an implementation:
/// storage, clock and id generation.
///
/// The authorization predicates are provided in terms of the directory.
pub trait Application: Send + Sync {
    /// The storage adapter
    type Repository: DirectoryRepository
        + TenderRepository
        + BidRepository
        + FeedbackRepository
        + Send
        + Sync;

    /// Get the repository
    fn database(&self) -> &Self::Repository;

    /// Get the current time
    fn now(&self) -> DateTime;

    /// Generate an id for a new tender
    fn generate_tender_id(&self) -> TenderId;

    /// Generate an id for a new bid
    fn generate_bid_id(&self) -> BidId;

    /// Generate an id for a new piece of feedback
    fn generate_feedback_id(&self) -> FeedbackId;

    /// Whether `user_id` may act on behalf of `organization_id`.
    fn is_org_responsible(
        &self,
        organization_id: OrganizationId,
        user_id: EmployeeId,
    ) -> impl Future<Output = Result<bool, RepositoryError<Self>>> + Send {
        self.database().is_responsible(organization_id, user_id)
    }

    /// Whether `user_id` may edit `bid`: its author for user-authored bids,
    /// a responsible employee of the authoring organization otherwise.
    fn can_manage_bid(
        &self,
        bid: &BidRecord,
        user_id: EmployeeId,
    ) -> impl Future<Output = Result<bool, RepositoryError<Self>>> + Send {
        let owned = bid.is_owned_by(user_id);
        let organization = bid.author_organization();
        async move {
            // Responsibility for an organization never grants rights over a
            // personal bid, even when the organization id equals the author id.
            match organization {
                Some(organization_id) => self.is_org_responsible(organization_id, user_id).await,
                None => Ok(owned),
            }
        }
    }
}
