//! Current-user session endpoints: tenants, roles, session switches.

use crate::config::ClientConfig;
use crate::shaper::{LogicalRequest, ParamCarrier, RequestShaper};
use crate::transport::HttpTransport;
use crate::Result;
use serde_json::Value;

pub struct UserService {
    transport: HttpTransport,
    shaper: RequestShaper,
}

impl UserService {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(config.iam_base.clone(), &config.http)?,
            shaper: RequestShaper::new(),
        })
    }

    async fn dispatch(&self, request: LogicalRequest) -> Result<Value> {
        let resolved = self.shaper.shape(&request)?;
        self.transport.execute(request.verb, &resolved).await
    }

    pub async fn query_self_tenants(&self) -> Result<Value> {
        self.dispatch(LogicalRequest::get("/hzero/v1/users/self-tenants"))
            .await
    }

    pub async fn query_default_role(&self) -> Result<Value> {
        self.dispatch(LogicalRequest::get("/hzero/v1/member-roles/current-role"))
            .await
    }

    pub async fn query_self_roles(&self) -> Result<Value> {
        self.dispatch(LogicalRequest::get("/hzero/v1/member-roles/self-roles"))
            .await
    }

    /// Cache the active role for the session. The id rides the query string.
    pub async fn set_current_role(&self, role_id: u64) -> Result<Value> {
        self.dispatch(
            LogicalRequest::put("/v1/users/roles")
                .param("roleId", role_id)
                .carrier(ParamCarrier::Query),
        )
        .await
    }

    /// Cache the active tenant for the session.
    pub async fn set_current_tenant(&self, tenant_id: u64) -> Result<Value> {
        self.dispatch(
            LogicalRequest::put("/v1/users/tenant-id")
                .param("tenantId", tenant_id)
                .carrier(ParamCarrier::Query),
        )
        .await
    }
}
