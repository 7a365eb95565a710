//! The `tickbox` library crate.
//!
//! Contains the domain models, the in-memory stores, the authentication
//! mechanisms (password hashing, token issuance/verification, the request
//! guard), routing configuration, and error handling for the tickbox API.
//! The binary (`main.rs`) uses this crate to construct and run the server.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
