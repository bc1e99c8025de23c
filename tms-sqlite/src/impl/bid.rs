use crate::{
    Db, history,
    history::Archived,
    query::{push_filter, push_order, push_page, select},
};
use sqlx::SqliteConnection;
use tms_core::{
    models::{
        ArchiveId, ArchiveRecord, BidId, BidOrder, BidPatch, BidQuery, BidRecord, BidStatus,
        DateTime, DecisionStatus, NewBid, Ordering, Page, Version,
    },
    ports::{BidRepository, RollbackFailure},
};

impl Archived for BidRecord {
    type Id = BidId;

    const TABLE: &'static str = "bid";
    const ARCHIVE: &'static str = "bid_archive";

    async fn archive(
        &self,
        archive_id: ArchiveId,
        conn: &mut SqliteConnection,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            insert into
                bid_archive (
                    archive_id, id, name, description, status, tender_id, author_type,
                    author_id, version, decision_status, created_at, updated_at
                )
            values
                ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(archive_id)
        .bind(self.id)
        .bind(&self.name)
        .bind(&self.description)
        .bind(self.status)
        .bind(self.tender_id)
        .bind(self.author_type)
        .bind(self.author_id)
        .bind(self.version)
        .bind(self.decision_status)
        .bind(self.created_at)
        .bind(self.updated_at)
        .execute(conn)
        .await?;
        Ok(())
    }

    async fn save(&self, conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            update
                bid
            set
                name = $2,
                description = $3,
                status = $4,
                decision_status = $5,
                version = $6,
                updated_at = $7
            where
                id = $1
            "#,
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(&self.description)
        .bind(self.status)
        .bind(self.decision_status)
        .bind(self.version)
        .bind(self.updated_at)
        .execute(conn)
        .await?;
        Ok(())
    }
}

impl BidRepository for Db {
    async fn create_bid(
        &self,
        bid_id: BidId,
        bid: NewBid,
        as_of: DateTime,
    ) -> Result<BidRecord, Self::Error> {
        sqlx::query_as(
            r#"
            insert into
                bid (
                    id, name, description, status, tender_id, author_type, author_id,
                    version, decision_status, created_at, updated_at
                )
            values
                ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
            returning
                *
            "#,
        )
        .bind(bid_id)
        .bind(bid.name)
        .bind(bid.description)
        .bind(BidStatus::Created)
        .bind(bid.tender_id)
        .bind(bid.author_type)
        .bind(bid.author_id)
        .bind(Version::INITIAL)
        .bind(DecisionStatus::Pending)
        .bind(as_of)
        .fetch_one(&self.writer)
        .await
    }

    async fn get_bid(&self, bid_id: BidId) -> Result<Option<BidRecord>, Self::Error> {
        sqlx::query_as("select * from bid where id = $1")
            .bind(bid_id)
            .fetch_optional(&self.reader)
            .await
    }

    async fn query_bids(
        &self,
        query: &BidQuery,
        order: Option<Ordering<BidOrder>>,
        page: Page,
    ) -> Result<Vec<BidRecord>, Self::Error> {
        let mut builder = select("bid");
        push_filter(&mut builder, "status", query.status.as_ref());
        push_filter(&mut builder, "tender_id", query.tender_id.as_ref());
        push_filter(&mut builder, "author_id", query.author_id.as_ref());
        push_order(&mut builder, order);
        push_page(&mut builder, page);

        builder
            .build_query_as::<BidRecord>()
            .fetch_all(&self.reader)
            .await
    }

    async fn update_bid(
        &self,
        bid_id: BidId,
        patch: BidPatch,
        as_of: DateTime,
    ) -> Result<Option<BidRecord>, Self::Error> {
        history::update(self, bid_id, patch, as_of).await
    }

    async fn rollback_bid(
        &self,
        bid_id: BidId,
        version: Version,
        as_of: DateTime,
    ) -> Result<Result<BidRecord, RollbackFailure>, Self::Error> {
        history::rollback(self, bid_id, version, as_of).await
    }

    async fn get_bid_history(
        &self,
        bid_id: BidId,
    ) -> Result<Vec<ArchiveRecord<BidRecord>>, Self::Error> {
        history::history(self, bid_id).await
    }
}
