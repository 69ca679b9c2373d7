//! MongoDB implementation of UserStore

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, oid::ObjectId},
    options::FindOptions,
};
use tracing::instrument;

use crate::models::{UserDocument, UserPayload};
use crate::store::{StoreResult, UserStore};

pub const DEFAULT_COLLECTION: &str = "users";

/// MongoDB implementation of the UserStore
#[derive(Clone)]
pub struct MongoUserStore {
    collection: Collection<UserDocument>,
}

impl MongoUserStore {
    /// Store backed by the `users` collection of `db`.
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let store = MongoUserStore::new(client.database("golangAPI"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<UserDocument>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<UserDocument> {
        &self.collection
    }

    /// `{ "_id": <oid> }`, or `None` when `id` is not an ObjectId.
    fn id_filter(id: &str) -> Option<Document> {
        ObjectId::parse_str(id).ok().map(|oid| doc! { "_id": oid })
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn insert(&self, user: &UserDocument) -> StoreResult<()> {
        self.collection.insert_one(user).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<UserDocument>> {
        let Some(filter) = Self::id_filter(id) else {
            return Ok(None);
        };
        Ok(self.collection.find_one(filter).await?)
    }

    #[instrument(skip(self, fields))]
    async fn update_by_id(&self, id: &str, fields: &UserPayload) -> StoreResult<u64> {
        let Some(filter) = Self::id_filter(id) else {
            return Ok(0);
        };
        let update = doc! {
            "$set": {
                "name": fields.name.as_str(),
                "location": fields.location.as_str(),
                "title": fields.title.as_str(),
            }
        };

        let result = self.collection.update_one(filter, update).await?;
        Ok(result.matched_count)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> StoreResult<u64> {
        let Some(filter) = Self::id_filter(id) else {
            return Ok(0);
        };
        let result = self.collection.delete_one(filter).await?;
        Ok(result.deleted_count)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> StoreResult<Vec<UserDocument>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    #[instrument(skip(self))]
    async fn find_page(&self, offset: u64, limit: i64) -> StoreResult<Vec<UserDocument>> {
        let options = FindOptions::builder().skip(offset).limit(limit).build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        Ok(cursor.try_collect().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_filter_accepts_object_id() {
        let oid = ObjectId::new();
        let filter = MongoUserStore::id_filter(&oid.to_hex()).unwrap();
        assert_eq!(filter.get_object_id("_id").unwrap(), oid);
    }

    #[test]
    fn test_id_filter_rejects_non_object_ids() {
        for id in ["", "abc", "6512bd43d9caa6e02c990b0", "zz12bd43d9caa6e02c990b0a"] {
            assert!(MongoUserStore::id_filter(id).is_none(), "{id}");
        }
    }
}
