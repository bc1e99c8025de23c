use crate::models::{
    DateTime, FeedbackId, FeedbackOrder, FeedbackQuery, FeedbackRecord, NewFeedback, Ordering,
    Page,
};

/// Repository interface for feedback on bids. Feedback is append-only.
pub trait FeedbackRepository: super::Repository {
    /// Store a new piece of feedback.
    fn create_feedback(
        &self,
        feedback_id: FeedbackId,
        feedback: NewFeedback,
        as_of: DateTime,
    ) -> impl Future<Output = Result<FeedbackRecord, Self::Error>> + Send;

    /// List the feedback matching `query`.
    fn query_feedback(
        &self,
        query: &FeedbackQuery,
        order: Option<Ordering<FeedbackOrder>>,
        page: Page,
    ) -> impl Future<Output = Result<Vec<FeedbackRecord>, Self::Error>> + Send;
}
