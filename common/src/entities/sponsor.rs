use std::str::FromStr;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::repository::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Paypal,
    Other,
}

impl FromStr for PaymentMethod {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paypal" => Ok(PaymentMethod::Paypal),
            "other" => Ok(PaymentMethod::Other),
            _ => Err(anyhow::anyhow!(
                "Payment method invalid value. Accepted values are: paypal, other"
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Confirmed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sponsor<Id> {
    pub id: Id,
    pub company_name: String,
    pub contact_email: String,
    pub gift_count: u32,
    pub amount_per_gift: i64,
    pub total_amount: i64,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub payment_transaction_id: Option<String>,
    pub message: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: i64,
    pub confirmed_at: Option<i64>,
}

impl Sponsor<String> {
    pub fn parse(self) -> Sponsor<ObjectId> {
        Sponsor {
            id: ObjectId::from_str(&self.id).unwrap(),
            company_name: self.company_name,
            contact_email: self.contact_email,
            gift_count: self.gift_count,
            amount_per_gift: self.amount_per_gift,
            total_amount: self.total_amount,
            payment_method: self.payment_method,
            payment_status: self.payment_status,
            payment_transaction_id: self.payment_transaction_id,
            message: self.message,
            logo_url: self.logo_url,
            created_at: self.created_at,
            confirmed_at: self.confirmed_at,
        }
    }
}

impl Sponsor<ObjectId> {
    pub fn stringify(self) -> Sponsor<String> {
        Sponsor {
            id: self.id.to_hex(),
            company_name: self.company_name,
            contact_email: self.contact_email,
            gift_count: self.gift_count,
            amount_per_gift: self.amount_per_gift,
            total_amount: self.total_amount,
            payment_method: self.payment_method,
            payment_status: self.payment_status,
            payment_transaction_id: self.payment_transaction_id,
            message: self.message,
            logo_url: self.logo_url,
            created_at: self.created_at,
            confirmed_at: self.confirmed_at,
        }
    }
}

impl Entity for Sponsor<ObjectId> {
    fn id(&self) -> ObjectId {
        self.id.clone()
    }

    fn timestamp(&self) -> i64 {
        self.created_at
    }
}
