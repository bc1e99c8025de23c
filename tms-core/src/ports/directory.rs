use crate::models::{
    DateTime, EmployeeId, EmployeeRecord, NewEmployee, NewOrganization, OrganizationId,
    OrganizationRecord, ResponsibleId, ResponsibleRecord,
};

/// Repository interface for the directory of employees and organizations.
///
/// The directory is read on every request: employees are looked up by the
/// username supplied with the request, and the organization/responsible
/// links decide what an employee may do. The write methods exist to seed the
/// directory; no endpoint modifies it.
pub trait DirectoryRepository: super::Repository {
    /// Register a new employee.
    fn create_employee(
        &self,
        employee_id: EmployeeId,
        employee: NewEmployee,
        as_of: DateTime,
    ) -> impl Future<Output = Result<EmployeeRecord, Self::Error>> + Send;

    /// Register a new organization.
    fn create_organization(
        &self,
        organization_id: OrganizationId,
        organization: NewOrganization,
        as_of: DateTime,
    ) -> impl Future<Output = Result<OrganizationRecord, Self::Error>> + Send;

    /// Make `user_id` responsible for `organization_id`.
    fn add_responsible(
        &self,
        responsible_id: ResponsibleId,
        organization_id: OrganizationId,
        user_id: EmployeeId,
    ) -> impl Future<Output = Result<ResponsibleRecord, Self::Error>> + Send;

    /// Look up an employee by id.
    fn get_employee(
        &self,
        employee_id: EmployeeId,
    ) -> impl Future<Output = Result<Option<EmployeeRecord>, Self::Error>> + Send;

    /// Look up an employee by username.
    fn get_employee_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<EmployeeRecord>, Self::Error>> + Send;

    /// Look up an organization by id.
    fn get_organization(
        &self,
        organization_id: OrganizationId,
    ) -> impl Future<Output = Result<Option<OrganizationRecord>, Self::Error>> + Send;

    /// Look up an organization by name. If several organizations share the
    /// name, any one of them is returned.
    fn get_organization_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<OrganizationRecord>, Self::Error>> + Send;

    /// Whether `user_id` is responsible for `organization_id`.
    fn is_responsible(
        &self,
        organization_id: OrganizationId,
        user_id: EmployeeId,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// All the organizations `user_id` is responsible for.
    fn responsible_organizations(
        &self,
        user_id: EmployeeId,
    ) -> impl Future<Output = Result<Vec<OrganizationId>, Self::Error>> + Send;
}
