use super::RollbackFailure;
use crate::models::{
    ArchiveRecord, BidId, BidOrder, BidPatch, BidQuery, BidRecord, DateTime, NewBid, Ordering,
    Page, Version,
};

/// Repository interface for bids and their version history.
///
/// Mirrors [`TenderRepository`](super::TenderRepository): edits archive the
/// pre-update state and bump the version in a single transaction.
pub trait BidRepository: super::Repository {
    /// Create a new bid at version 1, status `Created` and decision `Pending`.
    fn create_bid(
        &self,
        bid_id: BidId,
        bid: NewBid,
        as_of: DateTime,
    ) -> impl Future<Output = Result<BidRecord, Self::Error>> + Send;

    /// Retrieve the current state of a bid.
    fn get_bid(
        &self,
        bid_id: BidId,
    ) -> impl Future<Output = Result<Option<BidRecord>, Self::Error>> + Send;

    /// List the bids matching `query`, sorted by `order` (insertion order if
    /// `None`) and paginated by `page`.
    fn query_bids(
        &self,
        query: &BidQuery,
        order: Option<Ordering<BidOrder>>,
        page: Page,
    ) -> impl Future<Output = Result<Vec<BidRecord>, Self::Error>> + Send;

    /// Archive the bid's current state, then apply the patch and bump the
    /// version.
    ///
    /// # Returns
    ///
    /// - Ok(Some(bid)) with the updated bid if successful
    /// - Ok(None) if no such bid exists
    /// - Err otherwise
    fn update_bid(
        &self,
        bid_id: BidId,
        patch: BidPatch,
        as_of: DateTime,
    ) -> impl Future<Output = Result<Option<BidRecord>, Self::Error>> + Send;

    /// Restore the business fields archived at `version` as a new edit.
    fn rollback_bid(
        &self,
        bid_id: BidId,
        version: Version,
        as_of: DateTime,
    ) -> impl Future<Output = Result<Result<BidRecord, RollbackFailure>, Self::Error>> + Send;

    /// Retrieve every archived snapshot of the bid, oldest version first.
    fn get_bid_history(
        &self,
        bid_id: BidId,
    ) -> impl Future<Output = Result<Vec<ArchiveRecord<BidRecord>>, Self::Error>> + Send;
}
