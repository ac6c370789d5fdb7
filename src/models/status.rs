use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceStatus {
    pub name: String,
    pub version: String,
    pub env: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthApiResponse {
    pub success: bool,
    pub data: HealthStatus,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceStatusApiResponse {
    pub success: bool,
    pub data: ServiceStatus,
}
