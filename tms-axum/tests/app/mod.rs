#![allow(dead_code)]

use axum_test::TestServer;
use tms_axum::{config::AxumConfig, router};
use tms_core::{
    models::{
        BidId, DateTime, EmployeeId, EmployeeRecord, FeedbackId, NewEmployee, NewOrganization,
        OrganizationId, OrganizationKind, OrganizationRecord, ResponsibleId, TenderId,
    },
    ports::{Application, DirectoryRepository as _},
};
use tms_sqlite::{Db, config::SqliteConfig};

#[derive(Clone)]
pub struct TestApp(pub Db);

impl Application for TestApp {
    type Repository = Db;

    fn database(&self) -> &Self::Repository {
        &self.0
    }

    fn now(&self) -> DateTime {
        DateTime::now()
    }

    fn generate_tender_id(&self) -> TenderId {
        TenderId(uuid::Uuid::new_v4())
    }

    fn generate_bid_id(&self) -> BidId {
        BidId(uuid::Uuid::new_v4())
    }

    fn generate_feedback_id(&self) -> FeedbackId {
        FeedbackId(uuid::Uuid::new_v4())
    }
}

/// A directory with two organizations and three employees:
///
/// - `alice` is responsible for `Avito`
/// - `bob` is responsible for `Ozon`
/// - `carol` works for nobody
pub struct World {
    pub server: TestServer,
    pub db: Db,
    pub avito: OrganizationRecord,
    pub ozon: OrganizationRecord,
    pub alice: EmployeeRecord,
    pub bob: EmployeeRecord,
    pub carol: EmployeeRecord,
}

impl World {
    pub async fn new() -> Self {
        let db = Db::open(&SqliteConfig::default()).await.unwrap();

        let alice = employee(&db, "alice").await;
        let bob = employee(&db, "bob").await;
        let carol = employee(&db, "carol").await;
        let avito = organization(&db, "Avito", &alice).await;
        let ozon = organization(&db, "Ozon", &bob).await;

        let server =
            TestServer::new(router(TestApp(db.clone()), AxumConfig::default())).unwrap();

        Self {
            server,
            db,
            avito,
            ozon,
            alice,
            bob,
            carol,
        }
    }

    /// Create a tender for Avito as alice and return its id
    pub async fn tender(&self, name: &str, service_type: &str) -> String {
        let response = self
            .server
            .post("/tenders/new")
            .json(&serde_json::json!({
                "name": name,
                "description": format!("{name} description"),
                "service_type": service_type,
                "organization_id": self.avito.id,
                "creator_username": "alice",
            }))
            .await;
        response.assert_status_ok();
        id_of(&response.json())
    }

    /// Move a tender to another status as alice
    pub async fn set_tender_status(&self, tender_id: &str, status: &str) {
        self.server
            .patch(&format!("/tenders/{tender_id}/status"))
            .add_query_param("username", "alice")
            .add_query_param("status", status)
            .await
            .assert_status_ok();
    }

    /// Create a personal bid for carol and return its id
    pub async fn personal_bid(&self, tender_id: &str, name: &str) -> String {
        let response = self
            .server
            .post("/bids/new")
            .json(&serde_json::json!({
                "name": name,
                "description": "Delivery within a day",
                "tender_id": tender_id,
                "author_type": "User",
                "author_id": self.carol.id,
            }))
            .await;
        response.assert_status_ok();
        id_of(&response.json())
    }
}

pub fn id_of(value: &serde_json::Value) -> String {
    value["id"].as_str().unwrap().to_owned()
}

pub fn names(value: &serde_json::Value) -> Vec<&str> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect()
}

impl World {
    /// Register an organization under a chosen id, with one responsible employee
    pub async fn organization_with_id(
        &self,
        name: &str,
        id: uuid::Uuid,
        responsible: &EmployeeRecord,
    ) -> OrganizationRecord {
        organization_at(&self.db, OrganizationId(id), name, responsible).await
    }
}

async fn employee(db: &Db, username: &str) -> EmployeeRecord {
    db.create_employee(
        EmployeeId(uuid::Uuid::new_v4()),
        NewEmployee {
            username: username.to_owned(),
            first_name: None,
            last_name: None,
        },
        DateTime::now(),
    )
    .await
    .unwrap()
}

async fn organization(db: &Db, name: &str, responsible: &EmployeeRecord) -> OrganizationRecord {
    organization_at(db, OrganizationId(uuid::Uuid::new_v4()), name, responsible).await
}

async fn organization_at(
    db: &Db,
    id: OrganizationId,
    name: &str,
    responsible: &EmployeeRecord,
) -> OrganizationRecord {
    let organization = db
        .create_organization(
            id,
            NewOrganization {
                name: name.to_owned(),
                description: None,
                kind: Some(OrganizationKind::LLC),
            },
            DateTime::now(),
        )
        .await
        .unwrap();
    db.add_responsible(
        ResponsibleId(uuid::Uuid::new_v4()),
        organization.id,
        responsible.id,
    )
    .await
    .unwrap();
    organization
}
