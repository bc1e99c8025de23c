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
    models::{TenderPatch, TenderRecord, TenderStatus},
    ports::TenderRepository as _,
};
use tracing::{Level, event};
use validator::Validate;

/// Read the status of a tender. Published tenders are visible to every
/// known employee, the rest only to those responsible for the organization.
pub(crate) async fn get_tender_status<T: ApiApplication>(
    State(app): State<T>,
    ValidPath(Id { tender_id }): ValidPath<Id>,
    ValidQuery(caller): ValidQuery<Caller>,
) -> Result<Json<TenderStatus>, ApiError> {
    let user = guard::employee(&app, &caller.username).await?;
    let tender = guard::tender(&app, tender_id).await?;

    if tender.status != TenderStatus::Published {
        guard::responsible(&app, tender.organization_id, user.id).await?;
    }

    Ok(Json(tender.status))
}

/// Query parameters for a status change
#[derive(Deserialize, JsonSchema, Validate)]
pub(crate) struct TenderStatusQuery {
    /// The username of the caller
    #[validate(length(min = 1, max = 50))]
    username: String,
    /// The status to move to
    #[serde(alias = "new_status")]
    status: TenderStatus,
}

/// Move a tender to another status.
///
/// # Returns
///
/// - `200 OK`: The updated tender
/// - `400 Bad Request`: The tender already has the requested status
/// - `401 Unauthorized`: The caller is not a known employee
/// - `403 Forbidden`: The caller is not responsible for the tender's organization
/// - `404 Not Found`: The tender does not exist
pub(crate) async fn update_tender_status<T: ApiApplication>(
    State(app): State<T>,
    ValidPath(Id { tender_id }): ValidPath<Id>,
    ValidQuery(query): ValidQuery<TenderStatusQuery>,
) -> Result<Json<TenderRecord>, ApiError> {
    let user = guard::employee(&app, &query.username).await?;
    let tender = guard::tender(&app, tender_id).await?;
    guard::responsible(&app, tender.organization_id, user.id).await?;

    if tender.status == query.status {
        return Err(ApiError::NoopTransition);
    }

    let patch = TenderPatch {
        status: Some(query.status),
        ..Default::default()
    };
    let updated = app
        .database()
        .update_tender(tender.id, patch, app.now())
        .await
        .map_err(ApiError::internal)?
        .ok_or(ApiError::NotFound(Resource::Tender))?;

    event!(
        Level::DEBUG,
        tender_id = %updated.id,
        version = %updated.version,
        status = %updated.status,
        "changed tender status"
    );
    Ok(Json(updated))
}
