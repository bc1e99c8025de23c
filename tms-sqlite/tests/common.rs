#![allow(dead_code)]

use tms_core::{
    models::{
        DateTime, EmployeeId, EmployeeRecord, NewEmployee, NewOrganization, NewTender,
        OrganizationId, OrganizationKind, OrganizationRecord, ResponsibleId, TenderId,
        TenderRecord, TenderServiceType,
    },
    ports::{DirectoryRepository as _, TenderRepository as _},
};
use tms_sqlite::{Db, config::SqliteConfig};

pub async fn open() -> anyhow::Result<Db> {
    Ok(Db::open(&SqliteConfig::default()).await?)
}

/// Seconds after a fixed epoch, so that stamps sort in the order they are taken.
pub fn at(seconds: i64) -> DateTime {
    let epoch = time::OffsetDateTime::from_unix_timestamp(1_717_200_000)
        .expect("timestamp in range");
    (epoch + time::Duration::seconds(seconds)).into()
}

pub async fn employee(db: &Db, username: &str) -> anyhow::Result<EmployeeRecord> {
    Ok(db
        .create_employee(
            EmployeeId(uuid::Uuid::new_v4()),
            NewEmployee {
                username: username.to_owned(),
                first_name: None,
                last_name: None,
            },
            at(0),
        )
        .await?)
}

/// An organization with the given employees responsible for it
pub async fn organization(
    db: &Db,
    name: &str,
    responsible: &[&EmployeeRecord],
) -> anyhow::Result<OrganizationRecord> {
    let organization = db
        .create_organization(
            OrganizationId(uuid::Uuid::new_v4()),
            NewOrganization {
                name: name.to_owned(),
                description: None,
                kind: Some(OrganizationKind::LLC),
            },
            at(0),
        )
        .await?;
    for employee in responsible {
        db.add_responsible(
            ResponsibleId(uuid::Uuid::new_v4()),
            organization.id,
            employee.id,
        )
        .await?;
    }
    Ok(organization)
}

pub async fn tender(
    db: &Db,
    name: &str,
    service_type: TenderServiceType,
    organization: &OrganizationRecord,
    creator: &EmployeeRecord,
) -> anyhow::Result<TenderRecord> {
    Ok(db
        .create_tender(
            TenderId(uuid::Uuid::new_v4()),
            NewTender {
                name: name.to_owned(),
                description: format!("{name} description"),
                service_type,
                organization_id: organization.id,
                creator_username: creator.username.clone(),
            },
            at(1),
        )
        .await?)
}
