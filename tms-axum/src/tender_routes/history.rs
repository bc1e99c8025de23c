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
    models::{TenderId, TenderRecord, Version},
    ports::{RollbackFailure, TenderRepository as _},
};
use tracing::{Level, event};
use validator::Validate;

/// Path parameters for a rollback
#[derive(Deserialize, JsonSchema, Validate)]
#[schemars(inline)]
pub(crate) struct RollbackPath {
    /// The unique identifier of the tender
    tender_id: TenderId,
    /// The archived version to restore
    version: i64,
}

/// Restore the fields a tender had at an archived version, as a new edit.
///
/// # Returns
///
/// - `200 OK`: The tender after the rollback
/// - `400 Bad Request`: The version is not a positive integer
/// - `401 Unauthorized`: The caller is not a known employee
/// - `403 Forbidden`: The caller is not responsible for the tender's organization
/// - `404 Not Found`: The tender does not exist or the version was never archived
pub(crate) async fn rollback_tender<T: ApiApplication>(
    State(app): State<T>,
    ValidPath(path): ValidPath<RollbackPath>,
    ValidQuery(caller): ValidQuery<Caller>,
) -> Result<Json<TenderRecord>, ApiError> {
    let user = guard::employee(&app, &caller.username).await?;
    let tender = guard::tender(&app, path.tender_id).await?;
    guard::responsible(&app, tender.organization_id, user.id).await?;

    let version =
        Version::try_from(path.version).map_err(|err| ApiError::BadRequest(err.to_string()))?;

    let rolled_back = app
        .database()
        .rollback_tender(tender.id, version, app.now())
        .await
        .map_err(ApiError::internal)?
        .map_err(|failure| match failure {
            RollbackFailure::DoesNotExist => ApiError::NotFound(Resource::Tender),
            RollbackFailure::VersionNotFound => ApiError::NotFound(Resource::Version),
        })?;

    event!(
        Level::DEBUG,
        tender_id = %rolled_back.id,
        version = %rolled_back.version,
        restored = %version,
        "rolled back tender"
    );
    Ok(Json(rolled_back))
}
