use async_trait::async_trait;
use futures::StreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, Document},
    options::FindOptions,
};
use serde::{de::DeserializeOwned, Serialize};

use super::{Entity, Repository};

pub struct MongoRepository<T> {
    pub collection: mongodb::Collection<T>,
}

impl<T> MongoRepository<T> {
    pub async fn new(mongo_uri: &str, database: &str, collection: &str) -> Self {
        let collection = mongodb::Client::with_uri_str(mongo_uri)
            .await
            .unwrap()
            .database(database)
            .collection(collection);
        Self { collection }
    }
}

#[async_trait]
impl<T> Repository<T> for MongoRepository<T>
where
    T: Entity + Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    type Error = mongodb::error::Error;

    async fn create(&self, item: &T) -> Result<bool, Self::Error> {
        let result = self
            .collection
            .find_one(doc! {"id": item.id()}, None)
            .await?
            .is_none();

        if result {
            self.collection.insert_one(item, None).await?;
        }
        Ok(result)
    }

    async fn find(&self, field: &str, value: &Bson) -> Result<Option<T>, Self::Error> {
        let result = self.collection.find_one(doc! {field: value}, None).await?;
        Ok(result)
    }

    // Returns the pre-image; callers patch their own copy after the write.
    async fn update(&self, id: &ObjectId, update: Document) -> Result<Option<T>, Self::Error> {
        let result = self
            .collection
            .find_one_and_update(doc! {"id": id}, doc! {"$set": update}, None)
            .await?;
        Ok(result)
    }

    async fn find_many(&self, field: &str, value: &Bson) -> Result<Vec<T>, Self::Error> {
        let result: Vec<mongodb::error::Result<T>> = self
            .collection
            .find(doc! {field: value}, None)
            .await?
            .collect()
            .await;
        result.into_iter().collect::<mongodb::error::Result<_>>()
    }

    async fn find_all(&self, skip: u32, limit: u32) -> Result<Vec<T>, Self::Error> {
        let find_options = FindOptions::builder()
            .sort(doc! {"created_at": -1})
            .skip(skip as u64)
            .limit(limit as i64)
            .build();

        let results: Vec<mongodb::error::Result<T>> = self
            .collection
            .find(None, find_options)
            .await?
            .collect()
            .await;

        results.into_iter().collect::<mongodb::error::Result<_>>()
    }
}
