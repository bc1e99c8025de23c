use super::Id;
use crate::{
    ApiApplication, Caller,
    error::{ApiError, Resource},
    extract::{ValidPath, ValidQuery},
    guard,
};

use axum::{Json, extract::State};
use schemars::JsonSchema;
use serde::Deserialize;
use tms_core::{
    models::{BidId, BidPatch, BidRecord, BidStatus, DecisionStatus},
    ports::BidRepository as _,
};
use tracing::{Level, event};
use validator::Validate;

/// Read the status of a bid.
pub(crate) async fn get_bid_status<T: ApiApplication>(
    State(app): State<T>,
    ValidPath(Id { id }): ValidPath<Id<BidId>>,
    ValidQuery(caller): ValidQuery<Caller>,
) -> Result<Json<BidStatus>, ApiError> {
    guard::employee(&app, &caller.username).await?;
    let bid = guard::bid(&app, id).await?;
    Ok(Json(bid.status))
}

/// Query parameters for a status change
#[derive(Deserialize, JsonSchema, Validate)]
pub(crate) struct BidStatusQuery {
    /// The username of the caller
    #[validate(length(min = 1, max = 50))]
    username: String,
    /// The status to move to
    #[serde(alias = "new_status")]
    status: BidStatus,
}

/// Move a bid to another status.
///
/// # Returns
///
/// - `200 OK`: The updated bid
/// - `400 Bad Request`: The bid already has the requested status
/// - `401 Unauthorized`: The caller is not a known employee
/// - `403 Forbidden`: The caller may not manage the bid
/// - `404 Not Found`: The bid does not exist
pub(crate) async fn update_bid_status<T: ApiApplication>(
    State(app): State<T>,
    ValidPath(Id { id }): ValidPath<Id<BidId>>,
    ValidQuery(query): ValidQuery<BidStatusQuery>,
) -> Result<Json<BidRecord>, ApiError> {
    let user = guard::employee(&app, &query.username).await?;
    let bid = guard::bid(&app, id).await?;
    guard::bid_manager(&app, &bid, user.id).await?;

    if bid.status == query.status {
        return Err(ApiError::NoopTransition);
    }

    let patch = BidPatch {
        status: Some(query.status),
        ..Default::default()
    };
    let updated = app
        .database()
        .update_bid(bid.id, patch, app.now())
        .await
        .map_err(ApiError::internal)?
        .ok_or(ApiError::NotFound(Resource::Bid))?;

    event!(
        Level::DEBUG,
        bid_id = %updated.id,
        version = %updated.version,
        status = %updated.status,
        "changed bid status"
    );
    Ok(Json(updated))
}

/// Query parameters for a decision
#[derive(Deserialize, JsonSchema, Validate)]
pub(crate) struct DecisionQuery {
    /// The username of the caller
    #[validate(length(min = 1, max = 50))]
    username: String,
    /// The decision on the bid
    decision: DecisionStatus,
}

/// Record the tender organization's decision on a bid. The decision is an
/// edit like any other: the bid is archived first and its version bumped.
pub(crate) async fn submit_decision<T: ApiApplication>(
    State(app): State<T>,
    ValidPath(Id { id }): ValidPath<Id<BidId>>,
    ValidQuery(query): ValidQuery<DecisionQuery>,
) -> Result<Json<BidRecord>, ApiError> {
    let user = guard::employee(&app, &query.username).await?;
    let bid = guard::bid(&app, id).await?;
    let tender = guard::tender(&app, bid.tender_id).await?;
    guard::responsible(&app, tender.organization_id, user.id).await?;

    let patch = BidPatch {
        decision_status: Some(query.decision),
        ..Default::default()
    };
    let updated = app
        .database()
        .update_bid(bid.id, patch, app.now())
        .await
        .map_err(ApiError::internal)?
        .ok_or(ApiError::NotFound(Resource::Bid))?;

    event!(
        Level::DEBUG,
        bid_id = %updated.id,
        version = %updated.version,
        decision = %updated.decision_status,
        "decided on bid"
    );
    Ok(Json(updated))
}
