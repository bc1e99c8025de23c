use super::{ArchiveId, DateTime, Version};
use serde::{Deserialize, Serialize};

/// The capability shared by records that keep a version history.
///
/// A storage adapter persists an edit in one transaction: it snapshots the
/// current record into an [`ArchiveRecord`] (the snapshot keeps the
/// pre-update version), calls [`Versioned::apply`] and writes the result.
/// Rolling back to a snapshot is the same edit with [`Versioned::restore`]
/// as the patch, so the version counter keeps counting up.
pub trait Versioned: Clone {
    /// A partial edit of the record
    type Patch;

    /// The current version counter
    fn version(&self) -> Version;

    /// Merge the patch into the record, increment the version by exactly one
    /// and stamp the edit time.
    fn apply(&mut self, patch: Self::Patch, as_of: DateTime);

    /// The patch that reproduces this record's business fields when applied
    /// to a later version of the same record.
    fn restore(&self) -> Self::Patch;
}

/// An immutable snapshot of a versioned record, taken immediately before it
/// was edited.
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveRecord<T> {
    /// A unique id for the snapshot
    pub archive_id: ArchiveId,
    /// The record as it was; its `version` is the pre-update version
    #[serde(flatten)]
    pub record: T,
}

impl<T: Versioned> ArchiveRecord<T> {
    /// The version the record had when it was archived
    pub fn version(&self) -> Version {
        self.record.version()
    }
}
