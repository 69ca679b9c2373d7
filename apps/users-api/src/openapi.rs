//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Document metadata shared by every API of this service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        version = "0.1.0",
        description = "MongoDB-backed REST API for creating, reading, updating, deleting and paging through users",
    ),
    servers(
        (url = "http://localhost:6000", description = "Local development server")
    )
)]
struct ApiInfo;

/// Combined OpenAPI documentation for all APIs
///
/// The users routes are mounted at the root, so their paths are merged as-is.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ApiInfo::openapi();
        doc.merge(domain_users::ApiDoc::openapi());
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_user_paths() {
        let doc = ApiDoc::openapi();

        assert_eq!(doc.info.title, "Users API");
        for path in ["/user", "/user/{id}", "/users", "/users/search"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
