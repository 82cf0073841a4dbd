use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{self, oid::ObjectId, Bson, Document};
use serde::{de::DeserializeOwned, Serialize};

use super::{Entity, Repository};

pub struct TestRepository<T> {
    _t: std::marker::PhantomData<T>,
    pub db: Mutex<Vec<Bson>>,
}

impl<T> TestRepository<T> {
    pub fn new() -> Self {
        Self {
            _t: std::marker::PhantomData,
            db: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl<T> Repository<T> for TestRepository<T>
where
    T: Entity + Clone + PartialEq + Send + Sync + Serialize + DeserializeOwned,
{
    type Error = mongodb::error::Error;

    async fn create(&self, item: &T) -> Result<bool, Self::Error> {
        let mut db = self.db.lock().unwrap();

        let contains = db
            .iter()
            .any(|x| x.as_document().unwrap().get_object_id("id").unwrap() == item.id());
        if !contains {
            db.push(bson::to_bson(&item).unwrap());
        }
        Ok(!contains)
    }

    async fn find(&self, field: &str, value: &Bson) -> Result<Option<T>, Self::Error> {
        let db = self.db.lock().unwrap();
        Ok(db
            .iter()
            .find(|x| x.as_document().unwrap().get(field) == Some(value))
            .cloned()
            .map(|x| bson::from_bson(x).unwrap()))
    }

    async fn update(&self, id: &ObjectId, update: Document) -> Result<Option<T>, Self::Error> {
        let mut db = self.db.lock().unwrap();

        let Some(pos) = db
            .iter()
            .position(|x| &x.as_document().unwrap().get_object_id("id").unwrap() == id)
        else {
            return Ok(None);
        };

        let old = db[pos].clone();
        let mut merged = old.as_document().unwrap().clone();
        merged.extend(update);
        db[pos] = Bson::Document(merged);

        Ok(Some(bson::from_bson(old).unwrap()))
    }

    async fn find_many(&self, field: &str, value: &Bson) -> Result<Vec<T>, Self::Error> {
        let db = self.db.lock().unwrap();
        Ok(db
            .iter()
            .filter(|x| x.as_document().unwrap().get(field) == Some(value))
            .map(|x| bson::from_bson(x.clone()).unwrap())
            .collect())
    }

    async fn find_all(&self, skip: u32, limit: u32) -> Result<Vec<T>, Self::Error> {
        let db = self.db.lock().unwrap();
        let mut items: Vec<T> = db
            .iter()
            .map(|x| bson::from_bson(x.clone()).unwrap())
            .collect();

        items.sort_by_key(|x| std::cmp::Reverse(x.timestamp()));

        Ok(items
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }
}
