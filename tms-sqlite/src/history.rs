//! The archive-then-update transaction shared by tenders and bids.
//!
//! Every edit runs on the writer connection inside one transaction: read the
//! live row, copy it into the archive table under a fresh archive id, apply
//! the patch (which bumps the version) and write the row back. An error at
//! any step drops the transaction, rolling back the archive row with it.

use sqlx::{Row as _, SqliteConnection, sqlite::SqliteRow};
use tms_core::{
    models::{ArchiveId, ArchiveRecord, DateTime, Version, Versioned},
    ports::RollbackFailure,
};

use crate::Db;

/// A versioned record with a live table and an archive table.
pub(crate) trait Archived:
    Versioned + Send + Sync + Unpin + for<'r> sqlx::FromRow<'r, SqliteRow>
{
    type Id: Copy
        + Send
        + Sync
        + 'static
        + for<'q> sqlx::Encode<'q, sqlx::Sqlite>
        + sqlx::Type<sqlx::Sqlite>;

    /// The live table
    const TABLE: &'static str;

    /// The archive table, which repeats every column of the live table
    const ARCHIVE: &'static str;

    /// Insert a copy of this record into the archive table
    fn archive(
        &self,
        archive_id: ArchiveId,
        conn: &mut SqliteConnection,
    ) -> impl Future<Output = Result<(), sqlx::Error>> + Send;

    /// Overwrite the live row with this record
    fn save(
        &self,
        conn: &mut SqliteConnection,
    ) -> impl Future<Output = Result<(), sqlx::Error>> + Send;
}

async fn fetch_live<T: Archived>(
    id: T::Id,
    conn: &mut SqliteConnection,
) -> Result<Option<T>, sqlx::Error> {
    let sql = format!("select * from {} where id = $1", T::TABLE);
    sqlx::query_as::<_, T>(&sql)
        .bind(id)
        .fetch_optional(conn)
        .await
}

async fn archive_then_save<T: Archived>(
    mut record: T,
    patch: T::Patch,
    as_of: DateTime,
    conn: &mut SqliteConnection,
) -> Result<T, sqlx::Error> {
    record
        .archive(ArchiveId(uuid::Uuid::new_v4()), &mut *conn)
        .await?;
    record.apply(patch, as_of);
    record.save(conn).await?;
    Ok(record)
}

/// Archive the current state of `id`, then apply `patch` to it.
pub(crate) async fn update<T>(
    db: &Db,
    id: T::Id,
    patch: T::Patch,
    as_of: DateTime,
) -> Result<Option<T>, sqlx::Error>
where
    T: Archived,
    T::Patch: Send,
{
    let mut tx = db.writer.begin().await?;

    let Some(record) = fetch_live::<T>(id, &mut *tx).await? else {
        return Ok(None);
    };
    let record = archive_then_save(record, patch, as_of, &mut *tx).await?;

    tx.commit().await?;
    Ok(Some(record))
}

/// Replay the fields archived at `version` onto `id` as a new edit.
pub(crate) async fn rollback<T>(
    db: &Db,
    id: T::Id,
    version: Version,
    as_of: DateTime,
) -> Result<Result<T, RollbackFailure>, sqlx::Error>
where
    T: Archived,
    T::Patch: Send,
{
    let mut tx = db.writer.begin().await?;

    let Some(record) = fetch_live::<T>(id, &mut *tx).await? else {
        return Ok(Err(RollbackFailure::DoesNotExist));
    };

    let sql = format!(
        "select * from {} where id = $1 and version = $2",
        T::ARCHIVE
    );
    let Some(snapshot) = sqlx::query_as::<_, T>(&sql)
        .bind(id)
        .bind(version)
        .fetch_optional(&mut *tx)
        .await?
    else {
        return Ok(Err(RollbackFailure::VersionNotFound));
    };

    let record = archive_then_save(record, snapshot.restore(), as_of, &mut *tx).await?;

    tx.commit().await?;
    Ok(Ok(record))
}

/// Every archived snapshot of `id`, oldest first.
pub(crate) async fn history<T: Archived>(
    db: &Db,
    id: T::Id,
) -> Result<Vec<ArchiveRecord<T>>, sqlx::Error> {
    let sql = format!("select * from {} where id = $1 order by version asc", T::ARCHIVE);
    let rows = sqlx::query(&sql).bind(id).fetch_all(&db.reader).await?;

    rows.iter()
        .map(|row| {
            Ok(ArchiveRecord {
                archive_id: row.try_get("archive_id")?,
                record: T::from_row(row)?,
            })
        })
        .collect()
}
