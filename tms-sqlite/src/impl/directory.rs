use crate::Db;
use tms_core::{
    models::{
        DateTime, EmployeeId, EmployeeRecord, NewEmployee, NewOrganization, OrganizationId,
        OrganizationRecord, ResponsibleId, ResponsibleRecord,
    },
    ports::DirectoryRepository,
};

impl DirectoryRepository for Db {
    async fn create_employee(
        &self,
        employee_id: EmployeeId,
        employee: NewEmployee,
        as_of: DateTime,
    ) -> Result<EmployeeRecord, Self::Error> {
        sqlx::query_as(
            r#"
            insert into
                employee (id, username, first_name, last_name, created_at, updated_at)
            values
                ($1, $2, $3, $4, $5, $5)
            returning
                *
            "#,
        )
        .bind(employee_id)
        .bind(employee.username)
        .bind(employee.first_name)
        .bind(employee.last_name)
        .bind(as_of)
        .fetch_one(&self.writer)
        .await
    }

    async fn create_organization(
        &self,
        organization_id: OrganizationId,
        organization: NewOrganization,
        as_of: DateTime,
    ) -> Result<OrganizationRecord, Self::Error> {
        sqlx::query_as(
            r#"
            insert into
                organization (id, name, description, type, created_at, updated_at)
            values
                ($1, $2, $3, $4, $5, $5)
            returning
                *
            "#,
        )
        .bind(organization_id)
        .bind(organization.name)
        .bind(organization.description)
        .bind(organization.kind)
        .bind(as_of)
        .fetch_one(&self.writer)
        .await
    }

    async fn add_responsible(
        &self,
        responsible_id: ResponsibleId,
        organization_id: OrganizationId,
        user_id: EmployeeId,
    ) -> Result<ResponsibleRecord, Self::Error> {
        sqlx::query_as(
            r#"
            insert into
                organization_responsible (id, organization_id, user_id)
            values
                ($1, $2, $3)
            returning
                *
            "#,
        )
        .bind(responsible_id)
        .bind(organization_id)
        .bind(user_id)
        .fetch_one(&self.writer)
        .await
    }

    async fn get_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Option<EmployeeRecord>, Self::Error> {
        sqlx::query_as("select * from employee where id = $1")
            .bind(employee_id)
            .fetch_optional(&self.reader)
            .await
    }

    async fn get_employee_by_username(
        &self,
        username: &str,
    ) -> Result<Option<EmployeeRecord>, Self::Error> {
        sqlx::query_as("select * from employee where username = $1")
            .bind(username)
            .fetch_optional(&self.reader)
            .await
    }

    async fn get_organization(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Option<OrganizationRecord>, Self::Error> {
        sqlx::query_as("select * from organization where id = $1")
            .bind(organization_id)
            .fetch_optional(&self.reader)
            .await
    }

    async fn get_organization_by_name(
        &self,
        name: &str,
    ) -> Result<Option<OrganizationRecord>, Self::Error> {
        // Names are not unique; the oldest organization wins
        sqlx::query_as("select * from organization where name = $1 order by rowid limit 1")
            .bind(name)
            .fetch_optional(&self.reader)
            .await
    }

    async fn is_responsible(
        &self,
        organization_id: OrganizationId,
        user_id: EmployeeId,
    ) -> Result<bool, Self::Error> {
        sqlx::query_scalar(
            r#"
            select exists (
                select
                    1
                from
                    organization_responsible
                where
                    organization_id = $1
                and
                    user_id = $2
            )
            "#,
        )
        .bind(organization_id)
        .bind(user_id)
        .fetch_one(&self.reader)
        .await
    }

    async fn responsible_organizations(
        &self,
        user_id: EmployeeId,
    ) -> Result<Vec<OrganizationId>, Self::Error> {
        sqlx::query_scalar(
            "select organization_id from organization_responsible where user_id = $1 order by rowid",
        )
        .bind(user_id)
        .fetch_all(&self.reader)
        .await
    }
}
