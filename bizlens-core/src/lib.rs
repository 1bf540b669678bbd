//! # bizlens-core
//!
//! Core types for BizLens: the unified error enum and the free-text query
//! interpreter.
//!
//! ## Overview
//!
//! - [`BizlensError`] / [`Result`] - Unified error handling. Gateway failures
//!   are split into [`BizlensError::Remote`] (the backend answered with an
//!   error status) and [`BizlensError::Connectivity`] (the backend could not
//!   be reached), so callers can react to each without string matching.
//! - [`ParsedQuery`] / [`parse_query`] - The query interpreter: turns one
//!   user utterance like "open a pharmacy in Pune" into a structured
//!   (business type, location) pair, or flags that clarification is needed.
//!
//! ## Quick Start
//!
//! ```rust
//! use bizlens_core::parse_query;
//!
//! let query = parse_query("coffee shop in Mumbai");
//! assert_eq!(query.business_type.as_deref(), Some("coffee shop"));
//! assert_eq!(query.location.as_deref(), Some("Mumbai"));
//! assert!(!query.needs_clarification());
//! ```
//!
//! The interpreter is pure and never fails: an utterance it cannot resolve
//! comes back with `None` fields and `needs_clarification() == true`, and the
//! caller prompts the user instead of calling a backend.

pub mod error;
pub mod intent;

pub use error::{BizlensError, Result};
pub use intent::{FILLER_PREFIXES, KNOWN_CITIES, ParsedQuery, parse_query};
