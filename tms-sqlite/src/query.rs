//! The filtered-query layer: typed filters, orderings and pages rendered
//! onto a `select ... where 1 = 1` statement.

use sqlx::{QueryBuilder, Sqlite};
use tms_core::models::{BidOrder, Direction, FeedbackOrder, Filter, Ordering, Page, TenderOrder};

/// Maps an orderable field onto its column.
pub(crate) trait Column: Copy {
    fn column(self) -> &'static str;
}

impl Column for TenderOrder {
    fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CreatedAt => "created_at",
        }
    }
}

impl Column for BidOrder {
    fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CreatedAt => "created_at",
        }
    }
}

impl Column for FeedbackOrder {
    fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
        }
    }
}

/// Start a filtered select over `table`. Filters are appended as `and` clauses.
pub(crate) fn select<'args>(table: &str) -> QueryBuilder<'args, Sqlite> {
    let mut builder = QueryBuilder::new("select * from ");
    builder.push(table).push(" where 1 = 1");
    builder
}

pub(crate) fn push_filter<'args, T>(
    builder: &mut QueryBuilder<'args, Sqlite>,
    column: &str,
    filter: Option<&Filter<T>>,
) where
    T: Clone + Send + 'args + sqlx::Encode<'args, Sqlite> + sqlx::Type<Sqlite>,
{
    match filter {
        None => {}
        Some(Filter::Eq(value)) => {
            builder
                .push(" and ")
                .push(column)
                .push(" = ")
                .push_bind(value.clone());
        }
        // `in ()` is a syntax error in sqlite
        Some(Filter::In(values)) if values.is_empty() => {
            builder.push(" and 0");
        }
        Some(Filter::In(values)) => {
            builder.push(" and ").push(column).push(" in (");
            let mut separated = builder.separated(", ");
            for value in values {
                separated.push_bind(value.clone());
            }
            separated.push_unseparated(")");
        }
    }
}

/// Sort by the requested column, falling back to insertion order for ties
/// and when no ordering is requested.
pub(crate) fn push_order<F: Column>(builder: &mut QueryBuilder<'_, Sqlite>, order: Option<Ordering<F>>) {
    builder.push(" order by ");
    if let Some(Ordering { field, direction }) = order {
        builder.push(field.column()).push(match direction {
            Direction::Ascending => " asc, ",
            Direction::Descending => " desc, ",
        });
    }
    builder.push("rowid asc");
}

pub(crate) fn push_page(builder: &mut QueryBuilder<'_, Sqlite>, page: Page) {
    builder
        .push(" limit ")
        .push_bind(i64::from(page.limit))
        .push(" offset ")
        .push_bind(i64::from(page.offset));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tms_core::models::TenderStatus;

    #[test]
    fn filters_render_as_and_clauses() {
        let mut builder = select("tender");
        push_filter(&mut builder, "status", Some(&Filter::Eq(TenderStatus::Published)));
        push_filter::<String>(&mut builder, "creator_username", None);
        push_filter(
            &mut builder,
            "service_type",
            Some(&Filter::In(vec!["Delivery".to_owned(), "Construction".to_owned()])),
        );
        push_order(&mut builder, Some(Ordering::ascending(TenderOrder::Name)));
        push_page(&mut builder, Page::default());

        assert_eq!(
            builder.sql(),
            "select * from tender where 1 = 1 and status = ? and service_type in (?, ?) \
             order by name asc, rowid asc limit ? offset ?"
        );
    }

    #[test]
    fn empty_sets_render_as_false() {
        let mut builder = select("bid");
        push_filter::<String>(&mut builder, "author_id", Some(&Filter::In(Vec::new())));
        push_order::<BidOrder>(&mut builder, None);

        assert_eq!(
            builder.sql(),
            "select * from bid where 1 = 1 and 0 order by rowid asc"
        );
    }
}
