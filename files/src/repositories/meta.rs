use std::sync::Arc;

use common::{entities::file::Metadata, repository::Repository};
use mongodb::bson::{oid::ObjectId, Bson};

#[derive(Clone)]
pub struct MetaRepo(Arc<dyn Repository<Metadata, Error = mongodb::error::Error> + Send + Sync>);

impl MetaRepo {
    pub fn new<T>(repo: T) -> Self
    where
        T: Repository<Metadata, Error = mongodb::error::Error> + Send + Sync + 'static,
    {
        Self(Arc::new(repo))
    }

    pub async fn create(&self, meta: &Metadata) -> Result<bool, mongodb::error::Error> {
        self.0.create(meta).await
    }

    pub async fn find(&self, id: ObjectId) -> Result<Option<Metadata>, mongodb::error::Error> {
        self.0.find("id", &Bson::ObjectId(id)).await
    }

    pub async fn find_by_path(
        &self,
        path: &str,
    ) -> Result<Option<Metadata>, mongodb::error::Error> {
        self.0
            .find("path", &Bson::String(path.to_string()))
            .await
    }
}
