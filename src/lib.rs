pub mod api;
pub mod app_context;
pub mod args;
pub mod config_loader;
pub mod models;
pub(crate) mod pages;
pub mod web_server;
