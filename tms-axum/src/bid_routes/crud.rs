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
        AuthorId, AuthorType, BidId, BidPatch, BidRecord, BidStatus, EmployeeId, NewBid,
        OrganizationId, TenderId,
    },
    ports::{BidRepository as _, DirectoryRepository as _},
};
use tracing::{Level, event};
use validator::Validate;

/// Create a bid on a tender.
///
/// # Returns
///
/// - `200 OK`: The new bid, at version 1 with a pending decision
/// - `401 Unauthorized`: A personal bid names an unknown employee
/// - `404 Not Found`: An organization bid names an unknown organization, or
///   the tender does not exist
pub(crate) async fn create_bid<T: ApiApplication>(
    State(app): State<T>,
    ValidJson(body): ValidJson<CreateBidDto>,
) -> Result<Json<BidRecord>, ApiError> {
    let db = app.database();

    match body.author_type {
        AuthorType::Organization => {
            db.get_organization(OrganizationId(body.author_id.0))
                .await
                .map_err(ApiError::internal)?
                .ok_or(ApiError::NotFound(Resource::Organization))?;
        }
        AuthorType::User => {
            db.get_employee(EmployeeId(body.author_id.0))
                .await
                .map_err(ApiError::internal)?
                .ok_or(ApiError::Unauthenticated)?;
        }
    }
    let tender = guard::tender(&app, body.tender_id).await?;

    let bid = db
        .create_bid(
            app.generate_bid_id(),
            NewBid {
                name: body.name,
                description: body.description,
                tender_id: tender.id,
                author_type: body.author_type,
                author_id: body.author_id,
            },
            app.now(),
        )
        .await
        .map_err(ApiError::internal)?;

    event!(Level::DEBUG, bid_id = %bid.id, tender_id = %tender.id, "created bid");
    Ok(Json(bid))
}

/// Apply a partial edit to a bid.
///
/// # Returns
///
/// - `200 OK`: The edited bid
/// - `401 Unauthorized`: The caller is not a known employee
/// - `403 Forbidden`: The caller may not manage the bid
/// - `404 Not Found`: The bid does not exist
pub(crate) async fn edit_bid<T: ApiApplication>(
    State(app): State<T>,
    ValidPath(Id { id }): ValidPath<Id<BidId>>,
    ValidQuery(caller): ValidQuery<Caller>,
    ValidJson(body): ValidJson<EditBidDto>,
) -> Result<Json<BidRecord>, ApiError> {
    let user = guard::employee(&app, &caller.username).await?;
    let bid = guard::bid(&app, id).await?;
    guard::bid_manager(&app, &bid, user.id).await?;

    let updated = app
        .database()
        .update_bid(bid.id, body.into(), app.now())
        .await
        .map_err(ApiError::internal)?
        .ok_or(ApiError::NotFound(Resource::Bid))?;

    event!(Level::DEBUG, bid_id = %updated.id, version = %updated.version, "edited bid");
    Ok(Json(updated))
}

/// The body of a bid creation request
#[derive(Deserialize, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
pub(crate) struct CreateBidDto {
    /// The title of the bid
    #[validate(length(min = 1, max = 100))]
    name: String,
    /// What is being offered
    #[validate(length(max = 500))]
    description: String,
    /// The tender the bid answers
    tender_id: TenderId,
    /// Whether `author_id` is an employee or an organization
    author_type: AuthorType,
    /// The employee or organization authoring the bid
    author_id: AuthorId,
}

/// The body of a bid edit. Omitted fields are left untouched.
#[derive(Deserialize, JsonSchema, Validate)]
#[serde(deny_unknown_fields)]
pub(crate) struct EditBidDto {
    /// A new title
    #[validate(length(min = 1, max = 100))]
    name: Option<String>,
    /// A new description
    #[validate(length(max = 500))]
    description: Option<String>,
    /// A new status
    status: Option<BidStatus>,
}

impl From<EditBidDto> for BidPatch {
    fn from(value: EditBidDto) -> Self {
        Self {
            name: value.name,
            description: value.description,
            status: value.status,
            decision_status: None,
        }
    }
}
