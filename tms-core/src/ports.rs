mod application;
mod bid;
mod directory;
mod feedback;
mod tender;

pub use application::{Application, RepositoryError};
pub use bid::BidRepository;
pub use directory::DirectoryRepository;
pub use feedback::FeedbackRepository;
pub use tender::TenderRepository;

/// Base trait for all repository traits, fixing the error type of the
/// storage adapter.
pub trait Repository {
    /// The storage-level error. Any such error is unexpected from the point
    /// of view of the endpoint logic.
    type Error: std::error::Error + Send + Sync + 'static;
}

/// The ways a rollback can fail without a storage error. Neither failure
/// modifies anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollbackFailure {
    /// The record to roll back does not exist
    DoesNotExist,
    /// The record exists, but no snapshot of the requested version was archived
    VersionNotFound,
}
