//! Tenant-scoped code-rule maintenance.
//!
//! Every path here is templated on the organization segment; the same
//! endpoints serve site-level administration when no organization id is
//! given. Rules own distributions, distributions own detail segments.

use crate::config::ClientConfig;
use crate::shaper::{
    to_object_params, LogicalRequest, PageRequest, RequestShaper, BATCH_FIELD,
};
use crate::transport::HttpTransport;
use crate::Result;
use serde::Serialize;
use serde_json::{Map, Value};

const CODE_RULE: &str = "/v1/organizationId/code-rule";
const CODE_RULE_DIST: &str = "/v1/organizationId/code-rule-dist";
const CODE_RULE_DETAIL: &str = "/v1/organizationId/code-rule-detail";
const LOV_VALUE: &str = "/v1/lovs/value";

pub struct CodeRuleService {
    transport: HttpTransport,
    shaper: RequestShaper,
}

impl CodeRuleService {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(config.platform_base.clone(), &config.http)?,
            shaper: RequestShaper::new(),
        })
    }

    async fn dispatch(&self, request: LogicalRequest) -> Result<Value> {
        let resolved = self.shaper.shape(&request)?;
        self.transport.execute(request.verb, &resolved).await
    }

    /// List code rules matching `filters` (e.g. `ruleCode`, `ruleName`).
    pub async fn query_code_rules(
        &self,
        organization_id: Option<u64>,
        filters: Map<String, Value>,
        page: PageRequest,
    ) -> Result<Value> {
        self.dispatch(
            LogicalRequest::get(CODE_RULE)
                .params(filters)
                .page(page)
                .maybe_scoped(organization_id),
        )
        .await
    }

    pub async fn create_code_rule(
        &self,
        organization_id: Option<u64>,
        fields: &impl Serialize,
    ) -> Result<Value> {
        self.dispatch(
            LogicalRequest::post(CODE_RULE)
                .params(to_object_params(fields)?)
                .maybe_scoped(organization_id),
        )
        .await
    }

    /// Bulk-delete rules; each row carries `ruleId` and `objectVersionNumber`.
    pub async fn delete_code_rules<R: Serialize>(
        &self,
        organization_id: Option<u64>,
        rows: &[R],
    ) -> Result<Value> {
        self.dispatch(
            LogicalRequest::delete(CODE_RULE)
                .param(BATCH_FIELD, serde_json::to_value(rows)?)
                .maybe_scoped(organization_id),
        )
        .await
    }

    /// List the distributions of one rule.
    pub async fn query_distributions(
        &self,
        organization_id: Option<u64>,
        rule_id: u64,
        page: PageRequest,
    ) -> Result<Value> {
        self.dispatch(
            LogicalRequest::get(format!("{CODE_RULE}/{rule_id}"))
                .page(page)
                .maybe_scoped(organization_id),
        )
        .await
    }

    pub async fn save_distribution(
        &self,
        organization_id: Option<u64>,
        fields: &impl Serialize,
    ) -> Result<Value> {
        self.dispatch(
            LogicalRequest::post(CODE_RULE_DIST)
                .params(to_object_params(fields)?)
                .maybe_scoped(organization_id),
        )
        .await
    }

    pub async fn delete_distributions<R: Serialize>(
        &self,
        organization_id: Option<u64>,
        rows: &[R],
    ) -> Result<Value> {
        self.dispatch(
            LogicalRequest::delete(CODE_RULE_DIST)
                .param(BATCH_FIELD, serde_json::to_value(rows)?)
                .maybe_scoped(organization_id),
        )
        .await
    }

    /// Fetch the detail segments of one distribution.
    pub async fn query_rule_details(
        &self,
        organization_id: Option<u64>,
        rule_dist_id: u64,
    ) -> Result<Value> {
        self.dispatch(
            LogicalRequest::get(format!("{CODE_RULE_DETAIL}/{rule_dist_id}"))
                .maybe_scoped(organization_id),
        )
        .await
    }

    pub async fn save_rule_detail(
        &self,
        organization_id: Option<u64>,
        fields: &impl Serialize,
    ) -> Result<Value> {
        self.dispatch(
            LogicalRequest::post(CODE_RULE_DETAIL)
                .params(to_object_params(fields)?)
                .maybe_scoped(organization_id),
        )
        .await
    }

    pub async fn delete_rule_details<R: Serialize>(
        &self,
        organization_id: Option<u64>,
        rows: &[R],
    ) -> Result<Value> {
        self.dispatch(
            LogicalRequest::delete(CODE_RULE_DETAIL)
                .param(BATCH_FIELD, serde_json::to_value(rows)?)
                .maybe_scoped(organization_id),
        )
        .await
    }

    /// Look up value-set entries; un-scoped passthrough query.
    pub async fn query_lov_values(&self, lov_code: &str) -> Result<Value> {
        self.dispatch(LogicalRequest::get(LOV_VALUE).param("lovCode", lov_code))
            .await
    }
}
