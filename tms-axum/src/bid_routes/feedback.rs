use super::Id;
use crate::{
    ApiApplication,
    config::AxumConfig,
    default_limit,
    error::{ApiError, Resource},
    extract::{ValidPath, ValidQuery},
    guard,
};

use axum::{Extension, Json, extract::State};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tms_core::{
    models::{
        AuthorId, BidId, BidQuery, FeedbackOrder, FeedbackQuery, FeedbackRecord, Filter,
        NewFeedback, Ordering, Page, TenderId,
    },
    ports::{BidRepository as _, DirectoryRepository as _, FeedbackRepository as _},
};
use tracing::{Level, event};
use validator::Validate;

/// Query parameters for leaving feedback
#[derive(Deserialize, JsonSchema, Validate)]
pub(crate) struct SendFeedbackQuery {
    /// The username of the caller
    #[validate(length(min = 1, max = 50))]
    username: String,
    /// The feedback itself
    #[validate(length(min = 1, max = 1000))]
    bid_feedback: String,
}

/// Leave feedback on a bid on behalf of the tender's organization.
///
/// # Returns
///
/// - `200 OK`: The stored feedback
/// - `401 Unauthorized`: The caller is not a known employee
/// - `403 Forbidden`: The caller is not responsible for the tender's organization
/// - `404 Not Found`: The bid or its tender does not exist
pub(crate) async fn send_feedback<T: ApiApplication>(
    State(app): State<T>,
    ValidPath(Id { id }): ValidPath<Id<BidId>>,
    ValidQuery(query): ValidQuery<SendFeedbackQuery>,
) -> Result<Json<FeedbackRecord>, ApiError> {
    let user = guard::employee(&app, &query.username).await?;
    let bid = guard::bid(&app, id).await?;
    let tender = guard::tender(&app, bid.tender_id).await?;
    guard::responsible(&app, tender.organization_id, user.id).await?;

    let feedback = app
        .database()
        .create_feedback(
            app.generate_feedback_id(),
            NewFeedback {
                bid_id: bid.id,
                description: query.bid_feedback,
                username: user.username,
            },
            app.now(),
        )
        .await
        .map_err(ApiError::internal)?;

    event!(Level::DEBUG, feedback_id = %feedback.id, bid_id = %bid.id, "left feedback");
    Ok(Json(feedback))
}

/// Query parameters for reading reviews
#[derive(Deserialize, JsonSchema, Validate)]
pub(crate) struct ReviewsQuery {
    /// The username or organization name whose bids were reviewed
    #[validate(length(min = 1, max = 100))]
    author_username_or_organization_name: String,
    /// The username of the caller
    #[validate(length(min = 1, max = 50))]
    request_username: String,
    /// The maximum number of reviews to return
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    limit: u32,
    /// The number of reviews to skip
    #[serde(default)]
    offset: u32,
}

/// List the feedback left on every bid of an author, oldest first. The
/// tender only decides who may read it: the requester must be responsible
/// for the tender's organization.
///
/// The author is looked up as an employee username first, then as an
/// organization name.
pub(crate) async fn reviews<T: ApiApplication>(
    State(app): State<T>,
    Extension(config): Extension<Arc<AxumConfig>>,
    ValidPath(Id { id }): ValidPath<Id<TenderId>>,
    ValidQuery(query): ValidQuery<ReviewsQuery>,
) -> Result<Json<Vec<FeedbackRecord>>, ApiError> {
    let db = app.database();
    let requester = guard::employee(&app, &query.request_username).await?;
    let tender = guard::tender(&app, id).await?;
    guard::responsible(&app, tender.organization_id, requester.id).await?;

    let name = query.author_username_or_organization_name.as_str();
    let author = match db
        .get_employee_by_username(name)
        .await
        .map_err(ApiError::internal)?
    {
        Some(employee) => AuthorId::from(employee.id),
        None => db
            .get_organization_by_name(name)
            .await
            .map_err(ApiError::internal)?
            .map(|organization| AuthorId::from(organization.id))
            .ok_or(ApiError::NotFound(Resource::Author))?,
    };

    let bids = db
        .query_bids(
            &BidQuery {
                author_id: Some(Filter::Eq(author)),
                ..Default::default()
            },
            None,
            Page::ALL,
        )
        .await
        .map_err(ApiError::internal)?;
    if bids.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let feedback = db
        .query_feedback(
            &FeedbackQuery {
                bid_id: Some(Filter::from(
                    bids.into_iter().map(|bid| bid.id).collect::<Vec<_>>(),
                )),
            },
            Some(Ordering::ascending(FeedbackOrder::CreatedAt)),
            config.page(query.limit, query.offset),
        )
        .await
        .map_err(ApiError::internal)?;

    Ok(Json(feedback))
}
