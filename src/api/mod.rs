pub mod auth;
pub(crate) mod dashboard;
pub(crate) mod docs;
pub(crate) mod openapi;
