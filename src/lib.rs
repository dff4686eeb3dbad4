//! Monthly time accounting for shift workers.
//!
//! This crate computes a worker's monthly balance from recorded shifts and
//! non-accounting days (leave, holidays): elapsed shift time with midnight
//! wrap, a quantized night premium, the working days left after exclusions,
//! and the expected hours those working days imply.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod source;
