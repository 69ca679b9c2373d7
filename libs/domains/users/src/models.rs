use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::validation::non_empty;

/// User as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier, 24 hex characters
    #[schema(example = "6512bd43d9caa6e02c990b0a")]
    pub id: String,
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "NYC")]
    pub location: String,
    #[schema(example = "Engineer")]
    pub title: String,
}

/// User as persisted in the `users` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub location: String,
    pub title: String,
}

impl UserDocument {
    /// New document with a freshly generated identifier.
    pub fn new(payload: UserPayload) -> Self {
        Self {
            id: ObjectId::new(),
            name: payload.name,
            location: payload.location,
            title: payload.title,
        }
    }
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            name: doc.name,
            location: doc.location,
            title: doc.title,
        }
    }
}

/// Inbound representation for create and full-replacement update.
///
/// Absent fields deserialize as empty strings so they are reported by
/// validation alongside blank ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct UserPayload {
    #[validate(custom(function = "non_empty"))]
    #[schema(example = "Ann")]
    pub name: String,

    #[validate(custom(function = "non_empty"))]
    #[schema(example = "NYC")]
    pub location: String,

    #[validate(custom(function = "non_empty"))]
    #[schema(example = "Engineer")]
    pub title: String,
}

impl UserPayload {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            title: title.into(),
        }
    }
}

/// Pagination parameters for `GET /users/search`.
///
/// Both fields are optional at the type level so a missing parameter is a
/// validation failure reported together with any range violation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Number of users to skip, at least 1
    #[validate(
        required(message = "is required"),
        range(min = 1, message = "must be at least 1")
    )]
    #[param(minimum = 1, example = 1)]
    pub offset: Option<i64>,

    /// Page size, between 5 and 10
    #[validate(
        required(message = "is required"),
        range(min = 5, max = 10, message = "must be between 5 and 10")
    )]
    #[param(minimum = 5, maximum = 10, example = 5)]
    pub limit: Option<i64>,
}

impl SearchQuery {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
        }
    }
}
