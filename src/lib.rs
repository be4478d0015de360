#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # PCB Process Tracker
//!
//! Read-only reporting service that places every tracked PCB within the
//! manufacturing process flow.
//!
//! ## Overview
//!
//! For each assigned unit the service reports the current process step, the
//! three steps immediately before and after it in catalog order, and the
//! operators qualified to perform each of them. Units whose current step is
//! null or missing from the catalog are reported as "Unknown/Not Started".
//!
//! ## Module Organization
//!
//! - [`models`] - Row types for process steps, operators and unit assignments
//! - [`repository`] - Data-access seam with Postgres and in-memory backends
//! - [`tracking`] - Catalog indexing, window resolution and report assembly
//! - [`web`] - axum router, handlers and API errors
//! - [`config`] - Layered configuration
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pcb_tracker::models::{ProcessStep, Unit, UnitAssignment};
//! use pcb_tracker::repository::InMemoryTrackingRepository;
//! use pcb_tracker::tracking::ProcessTrackingService;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = InMemoryTrackingRepository::new(
//!     vec![ProcessStep::new(1, 1, "SMT"), ProcessStep::new(2, 2, "Reflow")],
//!     vec![(UnitAssignment::new("PCB-1", Some(2)), Unit::new("PCB-1", Some("SN-1")))],
//! );
//! let service = ProcessTrackingService::new(Arc::new(repository));
//!
//! for status in service.pcb_process_tracking().await? {
//!     println!("{} is at {}", status.unit_id, status.current_step_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod tracking;
pub mod web;

pub use config::TrackerConfig;
pub use error::{Result, TrackerError};
