use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::repository::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metadata {
    pub id: ObjectId,
    pub path: String,
    pub original_name: Option<String>,
    pub content_type: String,
    pub size: i64,
    pub created_at: i64,
}

impl Entity for Metadata {
    fn id(&self) -> ObjectId {
        self.id.clone()
    }

    fn timestamp(&self) -> i64 {
        self.created_at
    }
}
