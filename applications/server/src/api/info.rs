/// Service information route
use axum::Json;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub description: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

/// GET / - Static metadata describing the service and its endpoints
pub async fn service_info() -> Json<ServiceInfo> {
    let endpoints = BTreeMap::from([
        ("GET /", "Service information"),
        ("GET /health", "Health check"),
        ("GET /api/users", "List all users"),
        ("GET /api/users/<id>", "Get specific user"),
        ("POST /api/users", "Create new user"),
        ("PUT /api/users/<id>", "Update user"),
        ("DELETE /api/users/<id>", "Delete user"),
    ]);

    Json(ServiceInfo {
        service: "User Microservice",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        description: "REST API for user management",
        endpoints,
    })
}
