//! # Database
//!
//! Connection pool construction for the Postgres store.

pub mod connection;

pub use connection::connect_lazy;
