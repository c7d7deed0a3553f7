//! Data access adapters for the golf router.
//!
//! Responsibilities:
//! - Load golf course and station datasets from CSV files.
//! - Provide a directions provider backed by an online mapping service.
//!
//! Boundaries:
//! - Do not encode routing rules (live in `golf-router-core`).
//! - Keep blocking I/O off async executors; the HTTP provider owns its
//!   runtime.
//!
//! Invariants:
//! - Repositories are immutable once loaded.
//! - No global mutable state.

pub mod repository;
pub mod routing;
