//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct that generates the OpenAPI specification
//! for the stub service: the status banner and the two health probes. The
//! document is served as JSON in debug builds only.

use utoipa::OpenApi;

/// OpenAPI document for the stub service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Platform backend API",
        description = "Stub HTTP interface: status banner and health probes.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::api::index,
        crate::api::health::ready,
        crate::api::health::live,
    ),
    tags(
        (name = "status", description = "Service status banner"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;

    #[test]
    fn openapi_document_registers_every_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for route in ["/", "/health/ready", "/health/live"] {
            assert!(paths.contains_key(route), "missing path '{route}'");
        }
        assert_eq!(paths.len(), 3);
    }
}
