use super::RollbackFailure;
use crate::models::{
    ArchiveRecord, DateTime, NewTender, Ordering, Page, TenderId, TenderOrder, TenderPatch,
    TenderQuery, TenderRecord, Version,
};

/// Repository interface for tenders and their version history.
///
/// Every edit goes through [`TenderRepository::update_tender`] or
/// [`TenderRepository::rollback_tender`], both of which archive the
/// pre-update state and bump the version in a single transaction.
pub trait TenderRepository: super::Repository {
    /// Create a new tender at version 1 with status `Created`.
    fn create_tender(
        &self,
        tender_id: TenderId,
        tender: NewTender,
        as_of: DateTime,
    ) -> impl Future<Output = Result<TenderRecord, Self::Error>> + Send;

    /// Retrieve the current state of a tender.
    fn get_tender(
        &self,
        tender_id: TenderId,
    ) -> impl Future<Output = Result<Option<TenderRecord>, Self::Error>> + Send;

    /// List the tenders matching `query`, sorted by `order` (insertion order
    /// if `None`) and paginated by `page`.
    fn query_tenders(
        &self,
        query: &TenderQuery,
        order: Option<Ordering<TenderOrder>>,
        page: Page,
    ) -> impl Future<Output = Result<Vec<TenderRecord>, Self::Error>> + Send;

    /// Archive the tender's current state, then apply the patch and bump the
    /// version.
    ///
    /// # Returns
    ///
    /// - Ok(Some(tender)) with the updated tender if successful
    /// - Ok(None) if no such tender exists
    /// - Err otherwise
    fn update_tender(
        &self,
        tender_id: TenderId,
        patch: TenderPatch,
        as_of: DateTime,
    ) -> impl Future<Output = Result<Option<TenderRecord>, Self::Error>> + Send;

    /// Restore the business fields archived at `version` as a new edit: the
    /// current state is archived and the version keeps counting up.
    fn rollback_tender(
        &self,
        tender_id: TenderId,
        version: Version,
        as_of: DateTime,
    ) -> impl Future<Output = Result<Result<TenderRecord, RollbackFailure>, Self::Error>> + Send;

    /// Retrieve every archived snapshot of the tender, oldest version first.
    fn get_tender_history(
        &self,
        tender_id: TenderId,
    ) -> impl Future<Output = Result<Vec<ArchiveRecord<TenderRecord>>, Self::Error>> + Send;
}
