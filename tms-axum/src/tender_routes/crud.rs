use super::Id;
use crate::{
    ApiApplication, Caller,
    error::{ApiError, Resource},
    extract::{ValidJson, ValidPath, ValidQuery},
    guard,
};

use axum::{Json, extract::State};
use schemars::JsonSchema;
use serde::Deserialize;
use tms_core::{
    models::{
        NewTender, OrganizationId, TenderPatch, TenderRecord, TenderServiceType, TenderStatus,
    },
    ports::{DirectoryRepository as _, TenderRepository as _},
};
use tracing::{Level, event};
use validator::Validate;

/// Create a tender on behalf of an organization.
///
/// # Returns
///
/// - `200 OK`: The new tender, at version 1
/// - `401 Unauthorized`: The creator is not a known employee
/// - `403 Forbidden`: The creator is not responsible for the organization
/// - `404 Not Found`: The organization does not exist
pub(crate) async fn create_tender<T: ApiApplication>(
    State(app): State<T>,
    ValidJson(body): ValidJson<CreateTenderDto>,
) -> Result<Json<TenderRecord>, ApiError> {
    let db = app.database();

    db.get_organization(body.organization_id)
        .await
        .map_err(ApiError::internal)?
        .ok_or(ApiError::NotFound(Resource::Organization))?;
    let creator = guard::employee(&app, &body.creator_username).await?;
    guard::responsible(&app, body.organization_id, creator.id).await?;

    let tender = db
        .create_tender(
            app.generate_tender_id(),
            NewTender {
                name: body.name,
                description: body.description,
                service_type: body.service_type,
                organization_id: body.organization_id,
                creator_username: creator.username,
            },
            app.now(),
        )
        .await
        .map_err(ApiError::internal)?;

    event!(Level::DEBUG, tender_id = %tender.id, "created tender");
    Ok(Json(tender))
}

/// Apply a partial edit to a tender.
///
/// # Returns
///
/// - `200 OK`: The edited tender
/// - `401 Unauthorized`: The caller is not a known employee
/// - `403 Forbidden`: The caller is not responsible for the tender's organization
/// - `404 Not Found`: The tender does not exist
pub(crate) async fn edit_tender<T: ApiApplication>(
    State(app): State<T>,
    ValidPath(Id { tender_id }): ValidPath<Id>,
    ValidQuery(caller): ValidQuery<Caller>,
    ValidJson(body): ValidJson<EditTenderDto>,
) -> Result<Json<TenderRecord>, ApiError> {
    let user = guard::employee(&app, &caller.username).await?;
    let tender = guard::tender(&app, tender_id).await?;
    guard::responsible(&app, tender.organization_id, user.id).await?;

    let updated = app
        .database()
        .update_tender(tender.id, body.into(), app.now())
        .await
        .map_err(ApiError::internal)?
        .ok_or(ApiError::NotFound(Resource::Tender))?;

    event!(Level::DEBUG, tender_id = %updated.id, version = %updated.version, "edited tender");
    Ok(Json(updated))
}

/// The body of a tender creation request
#[derive(Deserialize, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
pub(crate) struct CreateTenderDto {
    /// The title of the tender
    #[validate(length(min = 1, max = 100))]
    name: String,
    /// What is being procured
    #[validate(length(max = 500))]
    description: String,
    /// The kind of service being procured
    service_type: TenderServiceType,
    /// The organization publishing the tender
    organization_id: OrganizationId,
    /// The username of the employee creating the tender
    #[validate(length(min = 1, max = 50))]
    creator_username: String,
}

/// The body of a tender edit. Omitted fields are left untouched.
#[derive(Deserialize, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
pub(crate) struct EditTenderDto {
    /// A new title
    #[validate(length(min = 1, max = 100))]
    name: Option<String>,
    /// A new description
    #[validate(length(max = 500))]
    description: Option<String>,
    /// A new status
    status: Option<TenderStatus>,
    /// A new service type
    service_type: Option<TenderServiceType>,
}

impl From<EditTenderDto> for TenderPatch {
    fn from(value: EditTenderDto) -> Self {
        Self {
            name: value.name,
            description: value.description,
            status: value.status,
            service_type: value.service_type,
        }
    }
}
