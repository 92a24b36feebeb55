/// Launch board library: store, table engine and HTTP views
pub mod clients;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod store;
pub mod table;
pub mod utils;
