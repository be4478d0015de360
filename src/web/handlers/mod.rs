//! # Web API Request Handlers
//!
//! HTTP request handlers organized by functional area.

pub mod health;
pub mod tracking;
