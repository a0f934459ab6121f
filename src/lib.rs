//! Administrative UI for roles held by a remote REST service: a role list
//! with purge-with-confirmation, and an edit form for a role's inherited
//! roles and directly granted privileges.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod router;
pub mod screens;
pub mod templates_structs;
