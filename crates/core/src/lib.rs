//! `dairysense-core` — shared primitives for the analytics engine.
//!
//! This crate contains **pure** building blocks (no infrastructure concerns):
//! strongly-typed identifiers and the error taxonomy every layer reports
//! through.

pub mod error;
pub mod id;

pub use error::{AnalyticsError, AnalyticsResult};
pub use id::UserId;
