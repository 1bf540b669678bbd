//! CSV-analysis backend gateway.
//!
//! Thin HTTP client for the CSV agent (default `http://localhost:8001`):
//! multipart upload plus session-scoped follow-up chat. The session id the
//! backend issues on upload is treated as an opaque pass-through token.
//!
//! # Environment Variable
//!
//! Set `BIZLENS_CSV_URL` to point at a non-default CSV backend.

mod client;
mod config;

pub use client::CsvClient;
pub use config::{CSV_API_BASE, CSV_URL_ENV, CsvConfig};
