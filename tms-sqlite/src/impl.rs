//! Repository trait implementations for the SQLite database.

use crate::Db;
use tms_core::ports::Repository;

mod bid;
mod directory;
mod feedback;
mod tender;

impl Repository for Db {
    type Error = sqlx::Error;
}
