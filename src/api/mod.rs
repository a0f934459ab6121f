//! Typed access to the remote role and privilege collections.
//!
//! The screens only see the `RoleApi` and `PrivilegeApi` traits; `RestClient`
//! is the HTTP implementation used by the server binary.

pub mod client;
pub mod error;
pub mod types;

use async_trait::async_trait;

pub use client::RestClient;
pub use error::{ApiError, ApiResult};
pub use types::{Link, Privilege, QueryParams, ResourceRef, Results, Role, RoleForm, View};

#[async_trait]
pub trait RoleApi: Send + Sync {
    /// All roles matching `params`. Pagination is resolved by the implementation.
    async fn query(&self, params: &QueryParams) -> ApiResult<Vec<Role>>;

    async fn get(&self, uuid: &str, params: &QueryParams) -> ApiResult<Role>;

    /// Create when `form.uuid` is `None`, update otherwise.
    async fn save(&self, form: &RoleForm) -> ApiResult<Role>;

    /// `purge = true` is a hard delete.
    async fn delete(&self, uuid: &str, purge: bool) -> ApiResult<()>;
}

#[async_trait]
pub trait PrivilegeApi: Send + Sync {
    async fn query(&self, params: &QueryParams) -> ApiResult<Vec<Privilege>>;
}
