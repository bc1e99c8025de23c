use crate::{
    Db,
    query::{push_filter, push_order, push_page, select},
};
use tms_core::{
    models::{
        DateTime, FeedbackId, FeedbackOrder, FeedbackQuery, FeedbackRecord, NewFeedback, Ordering,
        Page,
    },
    ports::FeedbackRepository,
};

impl FeedbackRepository for Db {
    async fn create_feedback(
        &self,
        feedback_id: FeedbackId,
        feedback: NewFeedback,
        as_of: DateTime,
    ) -> Result<FeedbackRecord, Self::Error> {
        sqlx::query_as(
            r#"
            insert into
                feedback (id, bid_id, description, username, created_at)
            values
                ($1, $2, $3, $4, $5)
            returning
                *
            "#,
        )
        .bind(feedback_id)
        .bind(feedback.bid_id)
        .bind(feedback.description)
        .bind(feedback.username)
        .bind(as_of)
        .fetch_one(&self.writer)
        .await
    }

    async fn query_feedback(
        &self,
        query: &FeedbackQuery,
        order: Option<Ordering<FeedbackOrder>>,
        page: Page,
    ) -> Result<Vec<FeedbackRecord>, Self::Error> {
        let mut builder = select("feedback");
        push_filter(&mut builder, "bid_id", query.bid_id.as_ref());
        push_order(&mut builder, order);
        push_page(&mut builder, page);

        builder
            .build_query_as::<FeedbackRecord>()
            .fetch_all(&self.reader)
            .await
    }
}
