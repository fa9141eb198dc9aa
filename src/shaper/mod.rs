//! Deterministic shaping of logical operations into wire-ready requests.
//!
//! Admin endpoints on the platform embed a tenant/organization id directly in
//! the path (`/v1/organizationId/code-rule`), take pagination as a nested
//! descriptor, and accept bulk mutations as a row array under a batch field.
//! The shaper turns that logical form into a concrete URL, query mapping and
//! body, enforcing one rule throughout: the scoping identifier is represented
//! exactly once — substituted into the URL path or carried as a parameter,
//! never both, and never left as a dangling template token.
//!
//! Three parameter keys are structural and interpreted by the shaper; every
//! other key is passthrough and forwarded untouched:
//!
//! | Key              | Meaning                                     |
//! |------------------|---------------------------------------------|
//! | `organizationId` | scoping field, folded into the URL path     |
//! | `page`           | nested pagination descriptor                |
//! | `selectedRows`   | batch row sequence for bulk mutations       |
//!
//! Every operation is a pure, stateless value transformation: nothing here
//! performs I/O, shares state across calls, or mutates its input.

mod pagination;
mod params;
mod path;
mod request;

pub use pagination::{Direction, PageRequest, SortInstruction};
pub use params::to_object_params;
pub use request::{LogicalRequest, ParamCarrier, ResolvedRequest, ScopingId, Verb};

use crate::{Error, ErrorContext, Result};
use serde_json::{Map, Value};
use tracing::debug;

/// Default scoping field and path placeholder token.
pub const SCOPING_FIELD: &str = "organizationId";
/// Default key holding a nested pagination descriptor.
pub const PAGE_FIELD: &str = "page";
/// Default key holding the row sequence of a bulk mutation.
pub const BATCH_FIELD: &str = "selectedRows";

/// Stateless request shaper.
///
/// The structural key names default to the platform's conventions and can be
/// overridden per service for backends that deviate.
#[derive(Debug, Clone)]
pub struct RequestShaper {
    scoping_field: String,
    page_field: String,
    batch_field: String,
}

impl Default for RequestShaper {
    fn default() -> Self {
        Self {
            scoping_field: SCOPING_FIELD.to_string(),
            page_field: PAGE_FIELD.to_string(),
            batch_field: BATCH_FIELD.to_string(),
        }
    }
}

impl RequestShaper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scoping_field(mut self, field: impl Into<String>) -> Self {
        self.scoping_field = field.into();
        self
    }

    pub fn with_page_field(mut self, field: impl Into<String>) -> Self {
        self.page_field = field.into();
        self
    }

    pub fn with_batch_field(mut self, field: impl Into<String>) -> Self {
        self.batch_field = field.into();
        self
    }

    /// Resolve the path template against an optional scoping id.
    ///
    /// Present: every placeholder segment becomes the id's string form.
    /// Absent: the placeholder segment is removed, leading separator included.
    pub fn resolve_path(&self, template: &str, scoping_id: Option<&ScopingId>) -> String {
        path::resolve(template, &self.scoping_field, scoping_id.map(ScopingId::as_str))
    }

    /// Return `params` without the scoping field. The input is left untouched;
    /// when the field is absent the result is an identity copy.
    pub fn strip_scoping_field(&self, params: &Map<String, Value>) -> Map<String, Value> {
        params::strip_field(params, &self.scoping_field)
    }

    /// Extract the batch row sequence from `params`, scoping field dropped.
    /// `None` when there is no batch field — nothing to send, not an error.
    pub fn strip_scoping_field_from_batch(
        &self,
        params: &Map<String, Value>,
    ) -> Option<Vec<Value>> {
        params::take_batch(&self.strip_scoping_field(params), &self.batch_field)
    }

    /// Flatten a nested pagination descriptor into `page`/`size`/`sort` query
    /// fields; all other keys pass through. No descriptor, no `page`/`size`.
    pub fn normalize_pagination(&self, params: &Map<String, Value>) -> Map<String, Value> {
        pagination::flatten(params, &self.page_field)
    }

    /// Turn a logical request into a wire-ready descriptor.
    ///
    /// The scoping field is folded into the URL (or the placeholder segment
    /// removed) and stripped from the parameters, then the cleaned parameters
    /// travel as query, body or batch body according to the carrier.
    pub fn shape(&self, request: &LogicalRequest) -> Result<ResolvedRequest> {
        if request.path_template.is_empty() {
            return Err(Error::validation_with_context(
                "path template must not be empty",
                ErrorContext::new().with_field_path("request.path_template"),
            ));
        }

        let url = self.resolve_path(&request.path_template, request.scoping_id.as_ref());
        let cleaned = self.strip_scoping_field(&request.params);

        let resolved = match request.carrier {
            ParamCarrier::Query => ResolvedRequest {
                url,
                query: self.normalize_pagination(&cleaned),
                body: None,
            },
            ParamCarrier::Body => ResolvedRequest {
                url,
                query: Map::new(),
                body: Some(Value::Object(cleaned)),
            },
            ParamCarrier::BatchBody => ResolvedRequest {
                url,
                query: Map::new(),
                body: params::take_batch(&cleaned, &self.batch_field).map(Value::Array),
            },
        };

        debug!(
            verb = %request.verb,
            url = %resolved.url,
            query_fields = resolved.query.len(),
            has_body = resolved.body.is_some(),
            "shaped request"
        );
        Ok(resolved)
    }
}
