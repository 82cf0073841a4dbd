use std::sync::Arc;

use common::{entities::sponsor::Sponsor, repository::Repository};
use mongodb::bson::{oid::ObjectId, Bson};

#[derive(Clone)]
pub struct SponsorRepo(
    Arc<dyn Repository<Sponsor<ObjectId>, Error = mongodb::error::Error> + Send + Sync>,
);

impl SponsorRepo {
    pub fn new<T>(repo: T) -> Self
    where
        T: Repository<Sponsor<ObjectId>, Error = mongodb::error::Error> + Send + Sync + 'static,
    {
        Self(Arc::new(repo))
    }

    pub async fn create(&self, sponsor: &Sponsor<ObjectId>) -> Result<bool, mongodb::error::Error> {
        self.0.create(sponsor).await
    }

    pub async fn find(
        &self,
        id: ObjectId,
    ) -> Result<Option<Sponsor<ObjectId>>, mongodb::error::Error> {
        self.0.find("id", &Bson::ObjectId(id)).await
    }

    pub async fn find_all(&self) -> Result<Vec<Sponsor<ObjectId>>, mongodb::error::Error> {
        self.0.find_all(0, u32::MAX).await
    }
}
