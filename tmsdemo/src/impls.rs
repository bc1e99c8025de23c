//! The concrete [`Application`] served by the binary.

use tms_core::{
    models::{BidId, DateTime, FeedbackId, TenderId},
    ports::Application,
};
use tms_sqlite::Db;
use uuid::Uuid;

/// The demo application: SQLite storage, the system clock and time-ordered
/// ids, so that ids sort roughly in creation order.
#[derive(Clone)]
pub struct DemoApp {
    /// Database connection for persistent storage
    pub db: Db,
}

impl Application for DemoApp {
    type Repository = Db;

    fn database(&self) -> &Self::Repository {
        &self.db
    }

    fn now(&self) -> DateTime {
        DateTime::now()
    }

    fn generate_tender_id(&self) -> TenderId {
        TenderId(Uuid::now_v7())
    }

    fn generate_bid_id(&self) -> BidId {
        BidId(Uuid::now_v7())
    }

    fn generate_feedback_id(&self) -> FeedbackId {
        FeedbackId(Uuid::now_v7())
    }
}
