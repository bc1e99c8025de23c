#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for the tender management service.
///
/// This module contains the records stored for organizations, employees,
/// tenders, bids and feedback, the typed patches used to edit the versioned
/// records, and the typed filters used to query them.
///
/// The models are plain data with a small amount of behavior: the
/// [`Versioned`](models::Versioned) capability that merges a patch and bumps
/// the version counter, and the ownership predicate on bids.
pub mod models;

/// Interface traits for the tender management service.
///
/// This module contains the "ports" in the hexagonal architecture pattern.
///
/// These traits define the contract between the endpoint logic and the
/// storage adapter without specifying implementation details.
pub mod ports;
