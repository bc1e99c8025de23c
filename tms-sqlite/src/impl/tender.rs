use crate::{
    Db, history,
    history::Archived,
    query::{push_filter, push_order, push_page, select},
};
use sqlx::SqliteConnection;
use tms_core::{
    models::{
        ArchiveId, ArchiveRecord, DateTime, NewTender, Ordering, Page, TenderId, TenderOrder,
        TenderPatch, TenderQuery, TenderRecord, TenderStatus, Version,
    },
    ports::{RollbackFailure, TenderRepository},
};

impl Archived for TenderRecord {
    type Id = TenderId;

    const TABLE: &'static str = "tender";
    const ARCHIVE: &'static str = "tender_archive";

    async fn archive(
        &self,
        archive_id: ArchiveId,
        conn: &mut SqliteConnection,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            insert into
                tender_archive (
                    archive_id, id, name, description, status, service_type, version,
                    organization_id, creator_username, created_at, updated_at
                )
            values
                ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(archive_id)
        .bind(self.id)
        .bind(&self.name)
        .bind(&self.description)
        .bind(self.status)
        .bind(self.service_type)
        .bind(self.version)
        .bind(self.organization_id)
        .bind(&self.creator_username)
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
                tender
            set
                name = $2,
                description = $3,
                status = $4,
                service_type = $5,
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
        .bind(self.service_type)
        .bind(self.version)
        .bind(self.updated_at)
        .execute(conn)
        .await?;
        Ok(())
    }
}

impl TenderRepository for Db {
    async fn create_tender(
        &self,
        tender_id: TenderId,
        tender: NewTender,
        as_of: DateTime,
    ) -> Result<TenderRecord, Self::Error> {
        sqlx::query_as(
            r#"
            insert into
                tender (
                    id, name, description, status, service_type, version,
                    organization_id, creator_username, created_at, updated_at
                )
            values
                ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            returning
                *
            "#,
        )
        .bind(tender_id)
        .bind(tender.name)
        .bind(tender.description)
        .bind(TenderStatus::Created)
        .bind(tender.service_type)
        .bind(Version::INITIAL)
        .bind(tender.organization_id)
        .bind(tender.creator_username)
        .bind(as_of)
        .fetch_one(&self.writer)
        .await
    }

    async fn get_tender(&self, tender_id: TenderId) -> Result<Option<TenderRecord>, Self::Error> {
        sqlx::query_as("select * from tender where id = $1")
            .bind(tender_id)
            .fetch_optional(&self.reader)
            .await
    }

    async fn query_tenders(
        &self,
        query: &TenderQuery,
        order: Option<Ordering<TenderOrder>>,
        page: Page,
    ) -> Result<Vec<TenderRecord>, Self::Error> {
        let mut builder = select("tender");
        push_filter(&mut builder, "status", query.status.as_ref());
        push_filter(&mut builder, "service_type", query.service_type.as_ref());
        push_filter(&mut builder, "organization_id", query.organization_id.as_ref());
        push_filter(&mut builder, "creator_username", query.creator_username.as_ref());
        push_order(&mut builder, order);
        push_page(&mut builder, page);

        builder
            .build_query_as::<TenderRecord>()
            .fetch_all(&self.reader)
            .await
    }

    async fn update_tender(
        &self,
        tender_id: TenderId,
        patch: TenderPatch,
        as_of: DateTime,
    ) -> Result<Option<TenderRecord>, Self::Error> {
        history::update(self, tender_id, patch, as_of).await
    }

    async fn rollback_tender(
        &self,
        tender_id: TenderId,
        version: Version,
        as_of: DateTime,
    ) -> Result<Result<TenderRecord, RollbackFailure>, Self::Error> {
        history::rollback(self, tender_id, version, as_of).await
    }

    async fn get_tender_history(
        &self,
        tender_id: TenderId,
    ) -> Result<Vec<ArchiveRecord<TenderRecord>>, Self::Error> {
        history::history(self, tender_id).await
    }
}
