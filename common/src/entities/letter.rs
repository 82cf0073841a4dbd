use std::str::FromStr;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::repository::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    Pending,
    Accepted,
    Delivered,
}

impl FromStr for LetterStatus {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(LetterStatus::Pending),
            "accepted" => Ok(LetterStatus::Accepted),
            "delivered" => Ok(LetterStatus::Delivered),
            _ => Err(anyhow::anyhow!(
                "Letter status invalid value. Accepted values are: pending, accepted, delivered"
            )),
        }
    }
}

impl LetterStatus {
    pub fn to_string(&self) -> String {
        match self {
            LetterStatus::Pending => "pending".to_string(),
            LetterStatus::Accepted => "accepted".to_string(),
            LetterStatus::Delivered => "delivered".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Letter<Id> {
    pub id: Id,
    pub child_name: String,
    pub age: u32,
    pub category: String,
    pub message: String,
    pub location: String,
    pub drawing_url: Option<String>,
    pub status: LetterStatus,
    pub sponsor_id: Option<Id>,
    pub sponsor_name: Option<String>,
    pub created_at: i64,
    pub coordinates: Option<Coordinates>,
}

impl Letter<String> {
    pub fn parse(self) -> Letter<ObjectId> {
        Letter {
            id: ObjectId::from_str(&self.id).unwrap(),
            child_name: self.child_name,
            age: self.age,
            category: self.category,
            message: self.message,
            location: self.location,
            drawing_url: self.drawing_url,
            status: self.status,
            sponsor_id: self
                .sponsor_id
                .map(|id| ObjectId::from_str(&id).unwrap()),
            sponsor_name: self.sponsor_name,
            created_at: self.created_at,
            coordinates: self.coordinates,
        }
    }
}

impl Letter<ObjectId> {
    pub fn stringify(self) -> Letter<String> {
        Letter {
            id: self.id.to_hex(),
            child_name: self.child_name,
            age: self.age,
            category: self.category,
            message: self.message,
            location: self.location,
            drawing_url: self.drawing_url,
            status: self.status,
            sponsor_id: self.sponsor_id.map(|id| id.to_hex()),
            sponsor_name: self.sponsor_name,
            created_at: self.created_at,
            coordinates: self.coordinates,
        }
    }
}

impl Entity for Letter<ObjectId> {
    fn id(&self) -> ObjectId {
        self.id.clone()
    }

    fn timestamp(&self) -> i64 {
        self.created_at
    }
}
