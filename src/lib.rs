pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod loader;
pub mod models;
pub mod sentiment;
pub mod service;
pub mod store;
