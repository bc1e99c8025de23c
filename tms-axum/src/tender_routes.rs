//! REST API endpoints for tenders.
//!
//! Tenders are published by organizations. Every endpoint that reads a
//! non-public tender or changes one requires the caller to be responsible
//! for the tender's organization.

use crate::{ApiApplication, error::ErrorResponse};
use aide::{
    axum::{
        ApiRouter,
        routing::{get_with, patch_with, post_with, put_with},
    },
    transform::TransformOperation,
};
use axum::Json;
use tms_core::models::TenderId;

mod crud;
use crud::*;

mod history;
use history::*;

mod list;
use list::*;

mod status;
use status::*;

/// Path parameter for tender-specific endpoints.
#[derive(serde::Deserialize, schemars::JsonSchema, validator::Validate)]
#[schemars(inline)]
struct Id {
    /// The unique identifier of the tender
    tender_id: TenderId,
}

/// Creates a router with tender-related endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route_with(
            "/",
            get_with(list_tenders::<T>, list_tenders_docs),
            |route| route.tag("tenders"),
        )
        .api_route_with(
            "/new",
            post_with(create_tender::<T>, create_tender_docs),
            |route| route.tag("tenders"),
        )
        .api_route_with(
            "/my",
            get_with(my_tenders::<T>, my_tenders_docs),
            |route| route.tag("tenders"),
        )
        .api_route_with(
            "/{tender_id}/status",
            get_with(get_tender_status::<T>, get_tender_status_docs)
                .patch_with(update_tender_status::<T>, update_tender_status_docs),
            |route| route.tag("tenders"),
        )
        .api_route_with(
            "/{tender_id}/edit",
            patch_with(edit_tender::<T>, edit_tender_docs),
            |route| route.tag("tenders"),
        )
        .api_route_with(
            "/{tender_id}/rollback/{version}",
            put_with(rollback_tender::<T>, rollback_tender_docs),
            |route| route.tag("tenders"),
        )
}

fn list_tenders_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("List published tenders")
        .description(
            r#"
            List the published tenders, sorted by name, optionally restricted to
            some service types. Repeat `service_type` to allow several types.
            "#,
        )
        .response_with::<422, Json<ErrorResponse>, _>(|res| res.description("Invalid parameters"))
}

fn create_tender_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Create a tender")
        .description(
            r#"
            Create a tender on behalf of an organization. The creator must be
            responsible for the organization. New tenders start at version 1 in
            the `Created` state.
            "#,
        )
        .response_with::<401, Json<ErrorResponse>, _>(|res| res.description("Unknown creator"))
        .response_with::<403, Json<ErrorResponse>, _>(|res| {
            res.description("The creator is not responsible for the organization")
        })
        .response_with::<404, Json<ErrorResponse>, _>(|res| res.description("Unknown organization"))
}

fn my_tenders_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("List the caller's tenders")
        .description(
            r#"
            With `query_type=author`, list the tenders the caller created. With
            `query_type=responsible` (the default), list the tenders of every
            organization the caller is responsible for.
            "#,
        )
        .response_with::<401, Json<ErrorResponse>, _>(|res| res.description("Unknown user"))
}

fn get_tender_status_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Get the status of a tender")
        .description(
            r#"
            Anyone may read the status of a published tender. Other tenders are
            only visible to employees responsible for their organization.
            "#,
        )
        .response_with::<401, Json<ErrorResponse>, _>(|res| res.description("Unknown user"))
        .response_with::<403, Json<ErrorResponse>, _>(|res| res.description("Not visible to the caller"))
        .response_with::<404, Json<ErrorResponse>, _>(|res| res.description("Unknown tender"))
}

fn update_tender_status_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Change the status of a tender")
        .description(
            r#"
            Move the tender to another status. This is an edit: the previous
            state is archived and the version is incremented.
            "#,
        )
        .response_with::<400, Json<ErrorResponse>, _>(|res| res.description("The tender already has this status"))
        .response_with::<401, Json<ErrorResponse>, _>(|res| res.description("Unknown user"))
        .response_with::<403, Json<ErrorResponse>, _>(|res| res.description("Not responsible for the tender"))
        .response_with::<404, Json<ErrorResponse>, _>(|res| res.description("Unknown tender"))
}

fn edit_tender_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Edit a tender")
        .description(
            r#"
            Change any of the name, description, status and service type of a
            tender. Omitted fields keep their value. The previous state is
            archived and the version is incremented.
            "#,
        )
        .response_with::<401, Json<ErrorResponse>, _>(|res| res.description("Unknown user"))
        .response_with::<403, Json<ErrorResponse>, _>(|res| res.description("Not responsible for the tender"))
        .response_with::<404, Json<ErrorResponse>, _>(|res| res.description("Unknown tender"))
}

fn rollback_tender_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Roll a tender back to a previous version")
        .description(
            r#"
            Restore the fields the tender had at `version`. The rollback is a
            new edit: the current state is archived and the version keeps
            counting up.
            "#,
        )
        .response_with::<400, Json<ErrorResponse>, _>(|res| res.description("Not a valid version number"))
        .response_with::<401, Json<ErrorResponse>, _>(|res| res.description("Unknown user"))
        .response_with::<403, Json<ErrorResponse>, _>(|res| res.description("Not responsible for the tender"))
        .response_with::<404, Json<ErrorResponse>, _>(|res| {
            res.description("Unknown tender, or the version was never archived")
        })
}
