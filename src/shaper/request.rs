//! Logical requests and the wire-ready descriptors they resolve into.

use serde_json::{Map, Value};
use std::fmt;

use super::pagination::PageRequest;
use super::PAGE_FIELD;

/// HTTP verb for a logical operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the cleaned parameters travel on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamCarrier {
    /// Flattened into the query string, pagination folded to `page`/`size`/`sort`.
    Query,
    /// Serialized as the JSON body.
    Body,
    /// The batch field's row sequence becomes the JSON body; other keys are dropped.
    BatchBody,
}

impl ParamCarrier {
    /// Carrier implied by the verb when the call site does not pick one.
    /// List fetches query, saves post a body, bulk deletes ship rows.
    pub fn for_verb(verb: Verb) -> Self {
        match verb {
            Verb::Get => ParamCarrier::Query,
            Verb::Post | Verb::Put => ParamCarrier::Body,
            Verb::Delete => ParamCarrier::BatchBody,
        }
    }
}

/// Tenant/organization identifier in string form, ready for path substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopingId(String);

impl ScopingId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for ScopingId {
    fn from(id: u64) -> Self {
        ScopingId(id.to_string())
    }
}

impl From<i64> for ScopingId {
    fn from(id: i64) -> Self {
        ScopingId(id.to_string())
    }
}

impl From<&str> for ScopingId {
    fn from(id: &str) -> Self {
        ScopingId(id.to_string())
    }
}

impl From<String> for ScopingId {
    fn from(id: String) -> Self {
        ScopingId(id)
    }
}

/// A logical operation before shaping: path template, verb, parameters and
/// optional scoping. Value-typed and reusable; shaping never mutates it.
#[derive(Debug, Clone)]
pub struct LogicalRequest {
    pub path_template: String,
    pub verb: Verb,
    pub params: Map<String, Value>,
    pub scoping_id: Option<ScopingId>,
    pub carrier: ParamCarrier,
}

impl LogicalRequest {
    pub fn new(verb: Verb, path_template: impl Into<String>) -> Self {
        Self {
            path_template: path_template.into(),
            verb,
            params: Map::new(),
            scoping_id: None,
            carrier: ParamCarrier::for_verb(verb),
        }
    }

    pub fn get(path_template: impl Into<String>) -> Self {
        Self::new(Verb::Get, path_template)
    }

    pub fn post(path_template: impl Into<String>) -> Self {
        Self::new(Verb::Post, path_template)
    }

    pub fn put(path_template: impl Into<String>) -> Self {
        Self::new(Verb::Put, path_template)
    }

    pub fn delete(path_template: impl Into<String>) -> Self {
        Self::new(Verb::Delete, path_template)
    }

    /// Add one parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Merge a whole parameter map (passthrough filter fields, typically).
    pub fn params(mut self, params: Map<String, Value>) -> Self {
        self.params.extend(params);
        self
    }

    /// Nest a pagination descriptor under the reserved `page` key.
    pub fn page(mut self, page: PageRequest) -> Self {
        // serializing a PageRequest cannot fail
        let value = serde_json::to_value(page).unwrap_or(Value::Null);
        self.params.insert(PAGE_FIELD.to_string(), value);
        self
    }

    pub fn scoped(mut self, id: impl Into<ScopingId>) -> Self {
        self.scoping_id = Some(id.into());
        self
    }

    /// Scope when the id is known; tenant-optional endpoints stay site-level otherwise.
    pub fn maybe_scoped(mut self, id: Option<impl Into<ScopingId>>) -> Self {
        self.scoping_id = id.map(Into::into);
        self
    }

    pub fn carrier(mut self, carrier: ParamCarrier) -> Self {
        self.carrier = carrier;
        self
    }
}

/// Wire-ready request descriptor: resolved URL, query mapping, optional body.
///
/// Invariants upheld by the shaper: no placeholder token survives in `url`,
/// and the scoping field never appears in `query` or `body` once it has been
/// folded into the URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    pub url: String,
    pub query: Map<String, Value>,
    pub body: Option<Value>,
}

impl ResolvedRequest {
    /// Expand the query mapping into repeated `key=value` pairs.
    ///
    /// Array values (sort tokens) emit one pair per element, preserving
    /// element order. Nulls are skipped — an absent filter is not sent.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.query {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        pairs.push((key.clone(), scalar_string(item)));
                    }
                }
                other => pairs.push((key.clone(), scalar_string(other))),
            }
        }
        pairs
    }
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn carrier_defaults_follow_the_verb() {
        assert_eq!(ParamCarrier::for_verb(Verb::Get), ParamCarrier::Query);
        assert_eq!(ParamCarrier::for_verb(Verb::Post), ParamCarrier::Body);
        assert_eq!(ParamCarrier::for_verb(Verb::Put), ParamCarrier::Body);
        assert_eq!(ParamCarrier::for_verb(Verb::Delete), ParamCarrier::BatchBody);
    }

    #[test]
    fn query_pairs_expand_arrays_in_order() {
        let resolved = ResolvedRequest {
            url: "/v1/5/code-rule".to_string(),
            query: serde_json::from_value(json!({
                "ruleCode": "ABC",
                "page": 0,
                "sort": ["ruleCode,asc", "creationDate,desc"],
            }))
            .unwrap(),
            body: None,
        };
        let pairs = resolved.query_pairs();
        let sorts: Vec<&str> = pairs
            .iter()
            .filter(|(k, _)| k == "sort")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(sorts, vec!["ruleCode,asc", "creationDate,desc"]);
        assert!(pairs.contains(&("page".to_string(), "0".to_string())));
        assert!(pairs.contains(&("ruleCode".to_string(), "ABC".to_string())));
    }

    #[test]
    fn query_pairs_skip_nulls() {
        let resolved = ResolvedRequest {
            url: "/v1/code-rule".to_string(),
            query: serde_json::from_value(json!({ "ruleName": null, "ruleCode": "ABC" }))
                .unwrap(),
            body: None,
        };
        assert_eq!(
            resolved.query_pairs(),
            vec![("ruleCode".to_string(), "ABC".to_string())]
        );
    }

    #[test]
    fn scoping_ids_accept_numeric_and_string_tenants() {
        assert_eq!(ScopingId::from(5u64).as_str(), "5");
        assert_eq!(ScopingId::from("acme").as_str(), "acme");
    }
}
