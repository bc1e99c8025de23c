//! Loading the employee and organization directory.
//!
//! The API never creates employees or organizations, so a fresh database is
//! populated from a JSON file instead.

use anyhow::Context as _;
use serde::Deserialize;
use tms_core::{
    models::{DateTime, EmployeeId, NewEmployee, NewOrganization, OrganizationId, ResponsibleId},
    ports::DirectoryRepository,
};
use tracing::{Level, event};
use uuid::Uuid;

/// The contents of a directory file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Directory {
    /// The employees to register
    #[serde(default)]
    pub employees: Vec<NewEmployee>,
    /// The organizations to register
    #[serde(default)]
    pub organizations: Vec<DirectoryOrganization>,
}

/// An organization, along with the usernames of the employees responsible
/// for it
#[derive(Debug, Deserialize)]
pub struct DirectoryOrganization {
    /// The organization itself
    #[serde(flatten)]
    pub organization: NewOrganization,
    /// Usernames of its responsible employees
    #[serde(default)]
    pub responsible: Vec<String>,
}

impl Directory {
    /// Read a directory from a JSON file.
    pub fn read(path: &std::path::Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("cannot open directory file {}", path.display()))?;
        serde_json::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("invalid directory file {}", path.display()))
    }

    /// Register every employee, then every organization and its
    /// responsible employees. Employees are registered first so that
    /// responsibilities may refer to them; they may also refer to employees
    /// already in the database.
    pub async fn load<R>(self, db: &R, as_of: DateTime) -> anyhow::Result<()>
    where
        R: DirectoryRepository,
    {
        let employees = self.employees.len();
        for employee in self.employees {
            let username = employee.username.clone();
            db.create_employee(EmployeeId(Uuid::new_v4()), employee, as_of)
                .await
                .with_context(|| format!("cannot register employee {username}"))?;
        }

        let organizations = self.organizations.len();
        for DirectoryOrganization {
            organization,
            responsible,
        } in self.organizations
        {
            let name = organization.name.clone();
            let organization = db
                .create_organization(OrganizationId(Uuid::new_v4()), organization, as_of)
                .await
                .with_context(|| format!("cannot register organization {name}"))?;

            for username in responsible {
                let employee = db
                    .get_employee_by_username(&username)
                    .await?
                    .ok_or_else(|| {
                        anyhow::anyhow!("{name} names unknown responsible employee {username}")
                    })?;
                db.add_responsible(ResponsibleId(Uuid::new_v4()), organization.id, employee.id)
                    .await?;
            }
        }

        event!(Level::INFO, employees, organizations, "directory loaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tms_sqlite::{Db, config::SqliteConfig};

    const DIRECTORY: &str = r#"{
        "employees": [
            { "username": "alice", "first_name": "Alice" },
            { "username": "bob" }
        ],
        "organizations": [
            { "name": "Avito", "type": "LLC", "responsible": ["alice", "bob"] },
            { "name": "Ozon" }
        ]
    }"#;

    #[tokio::test]
    async fn loads_employees_organizations_and_responsibilities() -> anyhow::Result<()> {
        let db = Db::open(&SqliteConfig::default()).await?;
        let directory: Directory = serde_json::from_str(DIRECTORY)?;
        directory.load(&db, DateTime::now()).await?;

        let alice = db.get_employee_by_username("alice").await?.context("alice")?;
        assert_eq!(alice.first_name.as_deref(), Some("Alice"));

        let avito = db.get_organization_by_name("Avito").await?.context("Avito")?;
        let ozon = db.get_organization_by_name("Ozon").await?.context("Ozon")?;
        assert!(db.is_responsible(avito.id, alice.id).await?);
        assert!(!db.is_responsible(ozon.id, alice.id).await?);
        assert_eq!(db.responsible_organizations(alice.id).await?, vec![avito.id]);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_responsible_employees_are_an_error() -> anyhow::Result<()> {
        let db = Db::open(&SqliteConfig::default()).await?;
        let directory: Directory = serde_json::from_str(
            r#"{ "organizations": [{ "name": "Avito", "responsible": ["mallory"] }] }"#,
        )?;
        assert!(directory.load(&db, DateTime::now()).await.is_err());
        Ok(())
    }
}
