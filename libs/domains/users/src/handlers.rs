//! HTTP endpoints for the users resource, answering with envelopes.

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use axum_helpers::{
    BadRequestResponse, Envelope, IdPath, InternalServerErrorResponse, JsonBody,
    NotFoundResponse, QueryParams,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{SearchQuery, User, UserPayload};
use crate::service::UserService;
use crate::store::UserStore;

/// Confirmation carried by a successful delete.
pub const DELETED_MESSAGE: &str = "User successfully deleted!";

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(create_user, get_user, update_user, delete_user, list_users, search_users),
    components(
        schemas(User, UserPayload, Envelope),
        responses(BadRequestResponse, NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Users", description = "User management endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<S: UserStore + 'static>(service: UserService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/user", post(create_user))
        .route(
            "/user/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/users", get(list_users))
        .route("/users/search", get(search_users))
        .with_state(shared_service)
}

/// Create a user
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created, `data.data` holds the user with its id", body = Envelope),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> UserResult<Envelope> {
    let user = service.create_user(payload).await?;
    Ok(Envelope::success(StatusCode::CREATED, &user))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "User found", body = Envelope),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    IdPath(id): IdPath,
) -> UserResult<Envelope> {
    let user = service.get_user(&id).await?;
    Ok(Envelope::success(StatusCode::OK, &user))
}

/// Replace a user's name, location and title
#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID (24 hex characters)")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated, `data.data` holds the stored user", body = Envelope),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<UserPayload>,
) -> UserResult<Envelope> {
    let user = service.update_user(&id, payload).await?;
    Ok(Envelope::success(StatusCode::OK, &user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "User deleted, `data.data` is a confirmation message", body = Envelope),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    IdPath(id): IdPath,
) -> UserResult<Envelope> {
    service.delete_user(&id).await?;
    Ok(Envelope::success(StatusCode::OK, DELETED_MESSAGE))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user", body = Envelope),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
) -> UserResult<Envelope> {
    let users = service.list_users().await?;
    Ok(Envelope::success(StatusCode::OK, &users))
}

/// Page through users
#[utoipa::path(
    get,
    path = "/users/search",
    tag = "Users",
    params(SearchQuery),
    responses(
        (status = 200, description = "Users after skipping `offset`, at most `limit`", body = Envelope),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_users<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> UserResult<Envelope> {
    let users = service.search_users(query).await?;
    Ok(Envelope::success(StatusCode::OK, &users))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserDocument;
    use crate::store::{MockUserStore, StoreError};
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use mongodb::bson::oid::ObjectId;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const ID: &str = "6512bd43d9caa6e02c990b0a";

    fn app(store: MockUserStore) -> Router {
        router(UserService::new(store))
    }

    fn stored_user() -> UserDocument {
        UserDocument {
            id: ObjectId::parse_str(ID).unwrap(),
            name: "Ann".to_string(),
            location: "NYC".to_string(),
            title: "Eng".to_string(),
        }
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_201_envelope_with_id() {
        let mut store = MockUserStore::new();
        store.expect_insert().times(1).returning(|_| Ok(()));

        let (status, body) = send(
            app(store),
            json_request("POST", "/user", json!({ "name": "Ann", "location": "NYC", "title": "Eng" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], 201);
        assert_eq!(body["message"], "success");
        assert_eq!(body["data"]["data"]["name"], "Ann");
        assert_eq!(body["data"]["data"]["id"].as_str().unwrap().len(), 24);
    }

    #[tokio::test]
    async fn test_create_missing_name_is_400_and_not_inserted() {
        let mut store = MockUserStore::new();
        store.expect_insert().never();

        let (status, body) = send(
            app(store),
            json_request("POST", "/user", json!({ "location": "NYC", "title": "Eng" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "error");
        assert!(body["data"]["data"].as_str().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn test_create_accepts_whitespace_only_field() {
        let mut store = MockUserStore::new();
        store
            .expect_insert()
            .withf(|doc| doc.name == " ")
            .times(1)
            .returning(|_| Ok(()));

        let (status, body) = send(
            app(store),
            json_request("POST", "/user", json!({ "name": " ", "location": "NYC", "title": "Eng" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["data"]["name"], " ");
    }

    #[tokio::test]
    async fn test_create_malformed_json_is_400() {
        let mut store = MockUserStore::new();
        store.expect_insert().never();

        let request = Request::builder()
            .method("POST")
            .uri("/user")
            .header("content-type", "application/json")
            .body(Body::from("{\"name\": "))
            .unwrap();
        let (status, body) = send(app(store), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert_eq!(body["message"], "error");
    }

    #[tokio::test]
    async fn test_get_returns_user() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_id()
            .returning(|_| Ok(Some(stored_user())));

        let (status, body) = send(app(store), empty_request("GET", &format!("/user/{ID}"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "status": 200,
                "message": "success",
                "data": { "data": { "id": ID, "name": "Ann", "location": "NYC", "title": "Eng" } }
            })
        );
    }

    #[tokio::test]
    async fn test_get_unknown_is_404() {
        let mut store = MockUserStore::new();
        store.expect_find_by_id().returning(|_| Ok(None));

        let (status, body) = send(app(store), empty_request("GET", "/user/nope")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["data"]["data"], "User with specified ID not found!");
    }

    #[tokio::test]
    async fn test_get_store_error_is_500() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_id()
            .returning(|_| Err(StoreError::Backend("server selection timeout".into())));

        let (status, body) = send(app(store), empty_request("GET", &format!("/user/{ID}"))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], 500);
        assert_eq!(body["message"], "error");
    }

    #[tokio::test]
    async fn test_undecodable_id_is_400_envelope() {
        for method in ["GET", "PUT", "DELETE"] {
            let mut store = MockUserStore::new();
            store.expect_find_by_id().never();
            store.expect_update_by_id().never();
            store.expect_delete_by_id().never();

            let request = if method == "PUT" {
                json_request(method, "/user/%FF", json!({ "name": "Ann", "location": "NYC", "title": "Eng" }))
            } else {
                empty_request(method, "/user/%FF")
            };
            let (status, body) = send(app(store), request).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{method}");
            assert_eq!(body["status"], 400, "{method}");
            assert_eq!(body["message"], "error", "{method}");
        }
    }

    #[tokio::test]
    async fn test_update_returns_refreshed_user() {
        let mut store = MockUserStore::new();
        store.expect_update_by_id().returning(|_, _| Ok(1));
        store.expect_find_by_id().returning(|_| {
            let mut doc = stored_user();
            doc.location = "LA".to_string();
            Ok(Some(doc))
        });

        let (status, body) = send(
            app(store),
            json_request(
                "PUT",
                &format!("/user/{ID}"),
                json!({ "name": "Ann", "location": "LA", "title": "Eng" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["data"]["location"], "LA");
    }

    #[tokio::test]
    async fn test_update_unknown_is_404() {
        let mut store = MockUserStore::new();
        store.expect_update_by_id().returning(|_, _| Ok(0));

        let (status, _) = send(
            app(store),
            json_request(
                "PUT",
                "/user/not-an-id",
                json!({ "name": "Ann", "location": "LA", "title": "Eng" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_confirms() {
        let mut store = MockUserStore::new();
        store.expect_delete_by_id().returning(|_| Ok(1));

        let (status, body) =
            send(app(store), empty_request("DELETE", &format!("/user/{ID}"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["data"], DELETED_MESSAGE);
    }

    #[tokio::test]
    async fn test_delete_unknown_is_404() {
        let mut store = MockUserStore::new();
        store.expect_delete_by_id().returning(|_| Ok(0));

        let (status, body) =
            send(app(store), empty_request("DELETE", &format!("/user/{ID}"))).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["data"]["data"], "User with specified ID not found!");
    }

    #[tokio::test]
    async fn test_list_returns_array() {
        let mut store = MockUserStore::new();
        store
            .expect_find_all()
            .returning(|| Ok(vec![stored_user()]));

        let (status, body) = send(app(store), empty_request("GET", "/users")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_empty_is_empty_array() {
        let mut store = MockUserStore::new();
        store.expect_find_all().returning(|| Ok(vec![]));

        let (status, body) = send(app(store), empty_request("GET", "/users")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["data"], json!([]));
    }

    #[tokio::test]
    async fn test_search_passes_page_to_store() {
        let mut store = MockUserStore::new();
        store
            .expect_find_page()
            .withf(|offset, limit| *offset == 2 && *limit == 7)
            .times(1)
            .returning(|_, _| Ok(vec![stored_user()]));

        let (status, body) =
            send(app(store), empty_request("GET", "/users/search?offset=2&limit=7")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["data"][0]["id"], ID);
    }

    #[tokio::test]
    async fn test_search_out_of_range_is_400_without_store_access() {
        for uri in [
            "/users/search?offset=1&limit=4",
            "/users/search?offset=1&limit=11",
            "/users/search?offset=0&limit=5",
            "/users/search?limit=5",
            "/users/search",
        ] {
            let mut store = MockUserStore::new();
            store.expect_find_page().never();

            let (status, body) = send(app(store), empty_request("GET", uri)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["message"], "error", "{uri}");
        }
    }

    #[tokio::test]
    async fn test_search_reports_both_violations() {
        let mut store = MockUserStore::new();
        store.expect_find_page().never();

        let (_, body) = send(app(store), empty_request("GET", "/users/search?offset=0&limit=20")).await;

        let description = body["data"]["data"].as_str().unwrap();
        assert!(description.contains("offset"));
        assert!(description.contains("limit"));
    }

    #[tokio::test]
    async fn test_search_non_numeric_is_400() {
        let mut store = MockUserStore::new();
        store.expect_find_page().never();

        let (status, _) = send(app(store), empty_request("GET", "/users/search?offset=one&limit=5")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
