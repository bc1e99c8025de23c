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
    models::{BidId, BidRecord, Version},
    ports::{BidRepository as _, RollbackFailure},
};
use tracing::{Level, event};
use validator::Validate;

/// Path parameters for a rollback
#[derive(Deserialize, JsonSchema, Validate)]
#[schemars(inline)]
pub(crate) struct RollbackPath {
    /// The unique identifier of the bid
    id: BidId,
    /// The archived version to restore
    version: i64,
}

/// Restore the fields a bid had at an archived version, as a new edit.
///
/// # Returns
///
/// - `200 OK`: The bid after the rollback
/// - `400 Bad Request`: The version is not a positive integer
/// - `401 Unauthorized`: The caller is not a known employee
/// - `403 Forbidden`: The caller may not manage the bid
/// - `404 Not Found`: The bid does not exist or the version was never archived
pub(crate) async fn rollback_bid<T: ApiApplication>(
    State(app): State<T>,
    ValidPath(path): ValidPath<RollbackPath>,
    ValidQuery(caller): ValidQuery<Caller>,
) -> Result<Json<BidRecord>, ApiError> {
    let user = guard::employee(&app, &caller.username).await?;
    let bid = guard::bid(&app, path.id).await?;
    guard::bid_manager(&app, &bid, user.id).await?;

    let version =
        Version::try_from(path.version).map_err(|err| ApiError::BadRequest(err.to_string()))?;

    let rolled_back = app
        .database()
        .rollback_bid(bid.id, version, app.now())
        .await
        .map_err(ApiError::internal)?
        .map_err(|failure| match failure {
            RollbackFailure::DoesNotExist => ApiError::NotFound(Resource::Bid),
            RollbackFailure::VersionNotFound => ApiError::NotFound(Resource::Version),
        })?;

    event!(
        Level::DEBUG,
        bid_id = %rolled_back.id,
        version = %rolled_back.version,
        restored = %version,
        "rolled back bid"
    );
    Ok(Json(rolled_back))
}
