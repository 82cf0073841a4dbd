use std::sync::Arc;

use common::{entities::letter::Letter, repository::Repository};
use mongodb::bson::{oid::ObjectId, Document};

#[derive(Clone)]
pub struct LetterRepo(
    Arc<dyn Repository<Letter<ObjectId>, Error = mongodb::error::Error> + Send + Sync>,
);

impl LetterRepo {
    pub fn new<T>(repo: T) -> Self
    where
        T: Repository<Letter<ObjectId>, Error = mongodb::error::Error> + Send + Sync + 'static,
    {
        Self(Arc::new(repo))
    }

    pub async fn create(&self, letter: &Letter<ObjectId>) -> Result<bool, mongodb::error::Error> {
        self.0.create(letter).await
    }

    pub async fn update(
        &self,
        id: &ObjectId,
        update: Document,
    ) -> Result<Option<Letter<ObjectId>>, mongodb::error::Error> {
        self.0.update(id, update).await
    }

    pub async fn find_all(&self) -> Result<Vec<Letter<ObjectId>>, mongodb::error::Error> {
        self.0.find_all(0, u32::MAX).await
    }
}
