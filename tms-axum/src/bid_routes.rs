//! REST API endpoints for bids.
//!
//! Bids answer tenders and are authored either by an employee or by an
//! organization. Their authors edit them; the tender's organization decides
//! on them and leaves feedback.
//!
//! Every route under `/{id}` shares one parameter name: it is a bid id for
//! the bid endpoints and a tender id for `list` and `reviews`.

use crate::{ApiApplication, error::ErrorResponse};
use aide::{
    axum::{
        ApiRouter,
        routing::{get_with, patch_with, post_with, put_with},
    },
    transform::TransformOperation,
};
use axum::Json;

mod crud;
use crud::*;

mod feedback;
use feedback::*;

mod history;
use history::*;

mod list;
use list::*;

mod status;
use status::*;

/// Path parameter for bid- or tender-specific endpoints.
#[derive(serde::Deserialize, schemars::JsonSchema, validator::Validate)]
#[schemars(inline)]
struct Id<I> {
    /// The unique identifier of the bid or tender
    id: I,
}

/// Creates a router with bid-related endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route_with(
            "/new",
            post_with(create_bid::<T>, create_bid_docs),
            |route| route.tag("bids"),
        )
        .api_route_with("/my", get_with(my_bids::<T>, my_bids_docs), |route| {
            route.tag("bids")
        })
        .api_route_with(
            "/{id}/list",
            get_with(tender_bids::<T>, tender_bids_docs),
            |route| route.tag("bids"),
        )
        .api_route_with(
            "/{id}/status",
            get_with(get_bid_status::<T>, get_bid_status_docs)
                .patch_with(update_bid_status::<T>, update_bid_status_docs),
            |route| route.tag("bids"),
        )
        .api_route_with(
            "/{id}/edit",
            patch_with(edit_bid::<T>, edit_bid_docs),
            |route| route.tag("bids"),
        )
        .api_route_with(
            "/{id}/rollback/{version}",
            put_with(rollback_bid::<T>, rollback_bid_docs),
            |route| route.tag("bids"),
        )
        .api_route_with(
            "/{id}/submit_decision",
            patch_with(submit_decision::<T>, submit_decision_docs),
            |route| route.tag("bids"),
        )
        .api_route_with(
            "/{id}/feedback",
            post_with(send_feedback::<T>, send_feedback_docs),
            |route| route.tag("bids"),
        )
        .api_route_with(
            "/{id}/reviews",
            get_with(reviews::<T>, reviews_docs),
            |route| route.tag("bids"),
        )
}

fn create_bid_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Create a bid")
        .description(
            r#"
            Create a bid on a tender. `author_id` is an employee id when
            `author_type` is `User` and an organization id when it is
            `Organization`.
            "#,
        )
        .response_with::<401, Json<ErrorResponse>, _>(|res| res.description("Unknown author employee"))
        .response_with::<404, Json<ErrorResponse>, _>(|res| {
            res.description("Unknown author organization or tender")
        })
}

fn my_bids_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("List the caller's bids")
        .description(
            r#"
            With `author_type=User` (the default), list the bids the caller
            authored personally. With `author_type=Organization`, list the bids
            of every organization the caller is responsible for.
            "#,
        )
        .response_with::<401, Json<ErrorResponse>, _>(|res| res.description("Unknown user"))
}

fn tender_bids_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("List the bids on a tender")
        .description(
            r#"
            List the published bids on the tender `id`, sorted by name. Only
            employees responsible for the tender's organization may see them.
            "#,
        )
        .response_with::<401, Json<ErrorResponse>, _>(|res| res.description("Unknown user"))
        .response_with::<403, Json<ErrorResponse>, _>(|res| res.description("Not responsible for the tender"))
        .response_with::<404, Json<ErrorResponse>, _>(|res| res.description("Unknown tender"))
}

fn get_bid_status_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Get the status of a bid")
        .response_with::<401, Json<ErrorResponse>, _>(|res| res.description("Unknown user"))
        .response_with::<404, Json<ErrorResponse>, _>(|res| res.description("Unknown bid"))
}

fn update_bid_status_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Change the status of a bid")
        .description(
            r#"
            Move the bid to another status. Only its author may do so: the
            employee for personal bids, a responsible employee of the
            organization otherwise. The previous state is archived and the
            version is incremented.
            "#,
        )
        .response_with::<400, Json<ErrorResponse>, _>(|res| res.description("The bid already has this status"))
        .response_with::<401, Json<ErrorResponse>, _>(|res| res.description("Unknown user"))
        .response_with::<403, Json<ErrorResponse>, _>(|res| res.description("Not the author of the bid"))
        .response_with::<404, Json<ErrorResponse>, _>(|res| res.description("Unknown bid"))
}

fn edit_bid_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Edit a bid")
        .description(
            r#"
            Change any of the name, description and status of a bid. Omitted
            fields keep their value. The previous state is archived and the
            version is incremented.
            "#,
        )
        .response_with::<401, Json<ErrorResponse>, _>(|res| res.description("Unknown user"))
        .response_with::<403, Json<ErrorResponse>, _>(|res| res.description("Not the author of the bid"))
        .response_with::<404, Json<ErrorResponse>, _>(|res| res.description("Unknown bid"))
}

fn rollback_bid_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Roll a bid back to a previous version")
        .description(
            r#"
            Restore the name, description and status the bid had at `version`.
            The decision on the bid is left alone. The rollback is a new edit:
            the current state is archived and the version keeps counting up.
            "#,
        )
        .response_with::<400, Json<ErrorResponse>, _>(|res| res.description("Not a valid version number"))
        .response_with::<401, Json<ErrorResponse>, _>(|res| res.description("Unknown user"))
        .response_with::<403, Json<ErrorResponse>, _>(|res| res.description("Not the author of the bid"))
        .response_with::<404, Json<ErrorResponse>, _>(|res| {
            res.description("Unknown bid, or the version was never archived")
        })
}

fn submit_decision_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Decide on a bid")
        .description(
            r#"
            Approve or reject a bid. Only employees responsible for the
            organization of the bid's tender may decide.
            "#,
        )
        .response_with::<401, Json<ErrorResponse>, _>(|res| res.description("Unknown user"))
        .response_with::<403, Json<ErrorResponse>, _>(|res| res.description("Not responsible for the tender"))
        .response_with::<404, Json<ErrorResponse>, _>(|res| res.description("Unknown bid or tender"))
}

fn send_feedback_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Leave feedback on a bid")
        .description(
            r#"
            Only employees responsible for the organization of the bid's tender
            may leave feedback.
            "#,
        )
        .response_with::<401, Json<ErrorResponse>, _>(|res| res.description("Unknown user"))
        .response_with::<403, Json<ErrorResponse>, _>(|res| res.description("Not responsible for the tender"))
        .response_with::<404, Json<ErrorResponse>, _>(|res| res.description("Unknown bid or tender"))
}

fn reviews_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Read the feedback left on an author's bids")
        .description(
            r#"
            List the feedback left on every bid an author (an employee username
            or, failing that, an organization name) has placed, on any tender,
            oldest first. The requester must be responsible for the
            organization of the tender `id`.
            "#,
        )
        .response_with::<401, Json<ErrorResponse>, _>(|res| res.description("Unknown requester"))
        .response_with::<403, Json<ErrorResponse>, _>(|res| res.description("Not responsible for the tender"))
        .response_with::<404, Json<ErrorResponse>, _>(|res| res.description("Unknown tender or author"))
}
