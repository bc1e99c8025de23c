use crate::{
    ApiApplication, any_of, config::AxumConfig, default_limit, error::ApiError,
    extract::ValidQuery, guard,
};

use axum::{Extension, Json, extract::State};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tms_core::{
    models::{Filter, Ordering, TenderOrder, TenderQuery, TenderRecord, TenderServiceType, TenderStatus},
    ports::{DirectoryRepository as _, TenderRepository as _},
};
use validator::Validate;

/// Query parameters for the public tender list
#[derive(Deserialize, JsonSchema, Validate)]
pub(crate) struct ListTendersQuery {
    /// The maximum number of tenders to return
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    limit: u32,
    /// The number of tenders to skip
    #[serde(default)]
    offset: u32,
    /// Only list tenders of these service types
    #[serde(default)]
    service_type: Vec<TenderServiceType>,
}

pub(crate) async fn list_tenders<T: ApiApplication>(
    State(app): State<T>,
    Extension(config): Extension<Arc<AxumConfig>>,
    ValidQuery(query): ValidQuery<ListTendersQuery>,
) -> Result<Json<Vec<TenderRecord>>, ApiError> {
    let filter = TenderQuery {
        status: Some(Filter::Eq(TenderStatus::Published)),
        service_type: any_of(query.service_type),
        ..Default::default()
    };

    let tenders = app
        .database()
        .query_tenders(
            &filter,
            Some(Ordering::ascending(TenderOrder::Name)),
            config.page(query.limit, query.offset),
        )
        .await
        .map_err(ApiError::internal)?;

    Ok(Json(tenders))
}

/// Which relationship to the caller selects a tender
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TenderQueryType {
    /// Tenders the caller created
    Author,
    /// Tenders of the organizations the caller is responsible for
    #[default]
    Responsible,
}

/// Query parameters for the caller's tender list
#[derive(Deserialize, JsonSchema, Validate)]
pub(crate) struct MyTendersQuery {
    /// The username of the caller
    #[validate(length(min = 1, max = 50))]
    username: String,
    /// How tenders relate to the caller
    #[serde(default)]
    query_type: TenderQueryType,
    /// The maximum number of tenders to return
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    limit: u32,
    /// The number of tenders to skip
    #[serde(default)]
    offset: u32,
    /// Only list tenders of these service types
    #[serde(default)]
    service_type: Vec<TenderServiceType>,
}

pub(crate) async fn my_tenders<T: ApiApplication>(
    State(app): State<T>,
    Extension(config): Extension<Arc<AxumConfig>>,
    ValidQuery(query): ValidQuery<MyTendersQuery>,
) -> Result<Json<Vec<TenderRecord>>, ApiError> {
    let db = app.database();
    let user = guard::employee(&app, &query.username).await?;

    let mut filter = TenderQuery {
        service_type: any_of(query.service_type),
        ..Default::default()
    };
    match query.query_type {
        TenderQueryType::Author => {
            filter.creator_username = Some(Filter::Eq(user.username));
        }
        TenderQueryType::Responsible => {
            let organizations = db
                .responsible_organizations(user.id)
                .await
                .map_err(ApiError::internal)?;
            if organizations.is_empty() {
                return Ok(Json(Vec::new()));
            }
            filter.organization_id = Some(Filter::from(organizations));
        }
    }

    let tenders = db
        .query_tenders(
            &filter,
            Some(Ordering::ascending(TenderOrder::Name)),
            config.page(query.limit, query.offset),
        )
        .await
        .map_err(ApiError::internal)?;

    Ok(Json(tenders))
}
