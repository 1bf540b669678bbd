//! # bizlens-gateway
//!
//! Backend gateway for BizLens: HTTP clients isolating the frontend from the
//! wire details of two independent agent backends.
//!
//! ## Overview
//!
//! - [`research::ResearchClient`] - the market-research agent
//!   (default `http://localhost:8000`): comprehensive research, city
//!   opportunities, raw scraped data, health.
//! - [`csv::CsvClient`] - the CSV-analysis agent
//!   (default `http://localhost:8001`): multipart CSV upload and
//!   session-scoped follow-up chat.
//!
//! ## Contract
//!
//! Every operation is a single stateless request/response exchange with two
//! terminal outcomes: the backend's JSON body verbatim, or a typed failure.
//! A non-success HTTP status becomes [`bizlens_core::BizlensError::Remote`]
//! carrying the backend's `detail` message when one is present; a transport
//! failure becomes [`bizlens_core::BizlensError::Connectivity`] naming the
//! unreachable backend. No retries, no timeouts unless configured, no local
//! caching.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bizlens_gateway::research::{ResearchClient, ResearchConfig, ResearchOptions};
//!
//! let client = ResearchClient::new(ResearchConfig::from_env())?;
//! let report = client
//!     .comprehensive_research("coffee shop", "Mumbai", &ResearchOptions::default())
//!     .await?;
//! println!("{report:#}");
//! ```

pub mod csv;
mod http;
pub mod research;

pub use csv::{CsvClient, CsvConfig};
pub use research::{OpportunityOptions, ResearchClient, ResearchConfig, ResearchOptions};
