//! Existence and permission checks shared by the endpoints. Each returns the
//! [`ApiError`] the endpoint answers with when the check fails.

use crate::{
    ApiApplication,
    error::{ApiError, Resource},
};
use tms_core::{
    models::{BidId, BidRecord, EmployeeId, EmployeeRecord, OrganizationId, TenderId, TenderRecord},
    ports::{BidRepository as _, DirectoryRepository as _, TenderRepository as _},
};

/// Resolve the employee a request claims to come from.
pub(crate) async fn employee<T: ApiApplication>(
    app: &T,
    username: &str,
) -> Result<EmployeeRecord, ApiError> {
    app.database()
        .get_employee_by_username(username)
        .await
        .map_err(ApiError::internal)?
        .ok_or(ApiError::Unauthenticated)
}

pub(crate) async fn tender<T: ApiApplication>(
    app: &T,
    tender_id: TenderId,
) -> Result<TenderRecord, ApiError> {
    app.database()
        .get_tender(tender_id)
        .await
        .map_err(ApiError::internal)?
        .ok_or(ApiError::NotFound(Resource::Tender))
}

pub(crate) async fn bid<T: ApiApplication>(app: &T, bid_id: BidId) -> Result<BidRecord, ApiError> {
    app.database()
        .get_bid(bid_id)
        .await
        .map_err(ApiError::internal)?
        .ok_or(ApiError::NotFound(Resource::Bid))
}

/// Require `user_id` to be responsible for `organization_id`.
pub(crate) async fn responsible<T: ApiApplication>(
    app: &T,
    organization_id: OrganizationId,
    user_id: EmployeeId,
) -> Result<(), ApiError> {
    if app
        .is_org_responsible(organization_id, user_id)
        .await
        .map_err(ApiError::internal)?
    {
        Ok(())
    } else {
        Err(ApiError::Forbidden)
    }
}

/// Require `user_id` to be allowed to edit `bid`.
pub(crate) async fn bid_manager<T: ApiApplication>(
    app: &T,
    bid: &BidRecord,
    user_id: EmployeeId,
) -> Result<(), ApiError> {
    if app
        .can_manage_bid(bid, user_id)
        .await
        .map_err(ApiError::internal)?
    {
        Ok(())
    } else {
        Err(ApiError::Forbidden)
    }
}
