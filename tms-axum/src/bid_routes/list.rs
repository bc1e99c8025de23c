use super::Id;
use crate::{
    ApiApplication,
    config::AxumConfig,
    default_limit,
    error::ApiError,
    extract::{ValidPath, ValidQuery},
    guard,
};

use axum::{Extension, Json, extract::State};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tms_core::{
    models::{
        AuthorId, AuthorType, BidOrder, BidQuery, BidRecord, BidStatus, Filter, Ordering,
        TenderId,
    },
    ports::{BidRepository as _, DirectoryRepository as _},
};
use validator::Validate;

fn default_author_type() -> AuthorType {
    AuthorType::User
}

/// Query parameters for the caller's bid list
#[derive(Deserialize, JsonSchema, Validate)]
pub(crate) struct MyBidsQuery {
    /// The username of the caller
    #[validate(length(min = 1, max = 50))]
    username: String,
    /// List personal bids (`User`) or the bids of the caller's organizations
    #[serde(default = "default_author_type")]
    author_type: AuthorType,
    /// The maximum number of bids to return
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    limit: u32,
    /// The number of bids to skip
    #[serde(default)]
    offset: u32,
}

pub(crate) async fn my_bids<T: ApiApplication>(
    State(app): State<T>,
    Extension(config): Extension<Arc<AxumConfig>>,
    ValidQuery(query): ValidQuery<MyBidsQuery>,
) -> Result<Json<Vec<BidRecord>>, ApiError> {
    let db = app.database();
    let user = guard::employee(&app, &query.username).await?;

    let authors = match query.author_type {
        AuthorType::User => Filter::Eq(AuthorId::from(user.id)),
        AuthorType::Organization => {
            let organizations = db
                .responsible_organizations(user.id)
                .await
                .map_err(ApiError::internal)?;
            if organizations.is_empty() {
                return Ok(Json(Vec::new()));
            }
            Filter::from(
                organizations
                    .into_iter()
                    .map(AuthorId::from)
                    .collect::<Vec<_>>(),
            )
        }
    };
    let filter = BidQuery {
        author_id: Some(authors),
        ..Default::default()
    };

    let bids = db
        .query_bids(
            &filter,
            Some(Ordering::ascending(BidOrder::Name)),
            config.page(query.limit, query.offset),
        )
        .await
        .map_err(ApiError::internal)?;

    Ok(Json(bids))
}

/// Query parameters for a paginated list on behalf of a caller
#[derive(Deserialize, JsonSchema, Validate)]
pub(crate) struct TenderBidsQuery {
    /// The username of the caller
    #[validate(length(min = 1, max = 50))]
    username: String,
    /// The maximum number of bids to return
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    limit: u32,
    /// The number of bids to skip
    #[serde(default)]
    offset: u32,
}

pub(crate) async fn tender_bids<T: ApiApplication>(
    State(app): State<T>,
    Extension(config): Extension<Arc<AxumConfig>>,
    ValidPath(Id { id }): ValidPath<Id<TenderId>>,
    ValidQuery(query): ValidQuery<TenderBidsQuery>,
) -> Result<Json<Vec<BidRecord>>, ApiError> {
    let user = guard::employee(&app, &query.username).await?;
    let tender = guard::tender(&app, id).await?;
    guard::responsible(&app, tender.organization_id, user.id).await?;

    let filter = BidQuery {
        status: Some(Filter::Eq(BidStatus::Published)),
        tender_id: Some(Filter::Eq(tender.id)),
        ..Default::default()
    };
    let bids = app
        .database()
        .query_bids(
            &filter,
            Some(Ordering::ascending(BidOrder::Name)),
            config.page(query.limit, query.offset),
        )
        .await
        .map_err(ApiError::internal)?;

    Ok(Json(bids))
}
