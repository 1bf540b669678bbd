//! Market-research backend gateway.
//!
//! Thin HTTP client for the research agent (default `http://localhost:8000`).
//! All operations return the backend's JSON verbatim; error shapes are
//! normalized into [`bizlens_core::BizlensError`].
//!
//! # Environment Variable
//!
//! Set `BIZLENS_RESEARCH_URL` to point at a non-default research backend.

mod client;
mod config;

pub use client::ResearchClient;
pub use config::{
    OpportunityOptions, RESEARCH_API_BASE, RESEARCH_URL_ENV, ResearchConfig, ResearchOptions,
};
