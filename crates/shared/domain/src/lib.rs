//! # Domain Models
//!
//! Compiled-in constants of the passport server and the immutable [`config::AppConfig`]
//! that carries them. Keep it lean: no I/O or logging here, only data and small helpers.

pub mod config;
pub mod constants;
pub mod error;
