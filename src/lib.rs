//! # platform-client
//!
//! Typed REST client and request-shaping layer for the platform's
//! administrative services (code-rule maintenance, user/tenant session
//! endpoints).
//!
//! ## Overview
//!
//! The platform's admin endpoints share three conventions: a tenant scoping
//! id embedded as a URL path segment, pagination passed as a nested
//! descriptor and flattened to `page`/`size`/`sort` query fields, and bulk
//! mutations shipped as a row array. This crate centralizes those rules in a
//! single [`shaper::RequestShaper`] so the per-endpoint wrappers stay thin.
//!
//! ## Core rules
//!
//! - **Exactly-once scoping**: the scoping id ends up in the URL path *or*
//!   in the parameters, never both, and never as a dangling template token.
//! - **Non-mutating**: shaping returns new values; a logical request can be
//!   shaped repeatedly (e.g. across retries) with identical results.
//! - **Passthrough by default**: only the documented structural keys are
//!   interpreted; every other parameter is forwarded untouched.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use platform_client::{ClientConfig, CodeRuleService, PageRequest, SortInstruction};
//!
//! #[tokio::main]
//! async fn main() -> platform_client::Result<()> {
//!     let config = ClientConfig::from_env()?;
//!     let code_rules = CodeRuleService::new(&config)?;
//!
//!     let page = PageRequest::new(0, 20).sorted_by(SortInstruction::asc("ruleCode"));
//!     let rules = code_rules
//!         .query_code_rules(Some(5), Default::default(), page)
//!         .await?;
//!     println!("{rules}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`shaper`] | Logical-request shaping: path templating, scoping, pagination |
//! | [`transport`] | reqwest-based dispatch of resolved requests |
//! | [`services`] | Thin per-endpoint wrappers (code rules, user session) |
//! | [`config`] | Service roots and HTTP tuning |

pub mod config;
pub mod services;
pub mod shaper;
pub mod transport;

// Re-export main types for convenience
pub use config::{ClientConfig, HttpOptions};
pub use services::{CodeRuleService, UserService};
pub use shaper::{
    Direction, LogicalRequest, PageRequest, ParamCarrier, RequestShaper, ResolvedRequest,
    ScopingId, SortInstruction, Verb,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
