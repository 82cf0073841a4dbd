use actix_web::{
    get, post,
    web::{self, Json},
    HttpResponse,
};
use chrono::Utc;
use common::entities::sponsor::{PaymentMethod, PaymentStatus, Sponsor};
use mongodb::bson::oid::ObjectId;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::{
    contants::AMOUNT_PER_GIFT,
    error::{Error, OuterError, Result},
    repositories::sponsor::SponsorRepo,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostSponsorRequest {
    pub company_name: String,
    pub contact_email: String,
    pub gift_count: u32,
    pub payment_method: String,
    pub message: Option<String>,
    pub logo_url: Option<String>,
}

// There is no payment gateway behind this; paypal pledges get a generated
// reference in the gateway's id shape.
fn mock_transaction_id() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();

    format!("PAYPAL-{}-{}", Utc::now().timestamp_millis(), suffix)
}

#[utoipa::path(
    request_body(
        content = PostSponsorRequest
    ),
    responses(
        (status = 200, body = Sponsor)
    )
)]
#[post("/api/sponsors")]
pub async fn post_sponsor(
    Json(data): web::Json<PostSponsorRequest>,
    repo: web::Data<SponsorRepo>,
) -> Result<Json<Sponsor<String>>> {
    if data.company_name.trim().is_empty() || data.contact_email.trim().is_empty() {
        return Err(Error::Outer(OuterError::MissingRequiredFields));
    }

    if data.gift_count == 0 {
        return Err(Error::Outer(OuterError::InvalidGiftCount));
    }

    let payment_method: PaymentMethod = data
        .payment_method
        .parse()
        .map_err(|_| Error::Outer(OuterError::InvalidPaymentMethod))?;

    let payment_transaction_id = match payment_method {
        PaymentMethod::Paypal => Some(mock_transaction_id()),
        PaymentMethod::Other => None,
    };

    let created_at = Utc::now().timestamp_micros();

    let sponsor = Sponsor {
        id: ObjectId::new(),
        company_name: data.company_name,
        contact_email: data.contact_email,
        gift_count: data.gift_count,
        amount_per_gift: AMOUNT_PER_GIFT,
        total_amount: data.gift_count as i64 * AMOUNT_PER_GIFT,
        payment_method,
        payment_status: PaymentStatus::Confirmed,
        payment_transaction_id,
        message: data.message,
        logo_url: data.logo_url,
        created_at,
        confirmed_at: Some(created_at),
    };

    repo.create(&sponsor).await?;

    Ok(Json(sponsor.stringify()))
}

#[utoipa::path(
    responses(
        (status = 200, body = [Sponsor])
    )
)]
#[get("/api/sponsors")]
pub async fn get_sponsors(repo: web::Data<SponsorRepo>) -> Result<Json<Vec<Sponsor<String>>>> {
    let sponsors = repo.find_all().await?;

    Ok(Json(sponsors.into_iter().map(Sponsor::stringify).collect()))
}

#[utoipa::path(
    responses(
        (status = 200, body = Sponsor)
    )
)]
#[get("/api/sponsors/{id}")]
pub async fn get_sponsor(
    id: web::Path<String>,
    repo: web::Data<SponsorRepo>,
) -> Result<HttpResponse> {
    let res = repo.find(id.parse()?).await?;
    if let Some(res) = res {
        Ok(HttpResponse::Ok().json(res.stringify()))
    } else {
        Ok(HttpResponse::Ok().json(json! {{}}))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::{self, init_service};
    use common::entities::sponsor::{PaymentStatus, Sponsor};

    use super::PostSponsorRequest;
    use crate::create_test_app;

    fn request(gift_count: u32, payment_method: &str) -> PostSponsorRequest {
        PostSponsorRequest {
            company_name: "ToyWorld".to_string(),
            contact_email: "santa@toyworld.example".to_string(),
            gift_count,
            payment_method: payment_method.to_string(),
            message: None,
            logo_url: None,
        }
    }

    #[actix_web::test]
    async fn test_post_sponsor_computes_total() {
        let mut app = init_service(create_test_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/sponsors")
            .set_json(&request(25, "paypal"))
            .to_request();

        let sponsor: Sponsor<String> = test::call_and_read_body_json(&mut app, req).await;

        assert_eq!(sponsor.total_amount, 25 * sponsor.amount_per_gift);
        assert_eq!(sponsor.payment_status, PaymentStatus::Confirmed);
        assert_eq!(sponsor.confirmed_at, Some(sponsor.created_at));
        assert!(sponsor
            .payment_transaction_id
            .as_ref()
            .unwrap()
            .starts_with("PAYPAL-"));
    }

    #[actix_web::test]
    async fn test_post_sponsor_other_payment_has_no_transaction() {
        let mut app = init_service(create_test_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/sponsors")
            .set_json(&request(10, "other"))
            .to_request();

        let sponsor: Sponsor<String> = test::call_and_read_body_json(&mut app, req).await;

        assert_eq!(sponsor.payment_transaction_id, None);
        assert_eq!(sponsor.payment_status, PaymentStatus::Confirmed);
    }

    #[actix_web::test]
    async fn test_post_sponsor_rejects_zero_gifts() {
        let mut app = init_service(create_test_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/sponsors")
            .set_json(&request(0, "paypal"))
            .to_request();

        let resp = test::call_service(&mut app, req).await;
        assert!(resp.status().is_client_error());
    }

    #[actix_web::test]
    async fn test_post_sponsor_rejects_unknown_payment_method() {
        let mut app = init_service(create_test_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/sponsors")
            .set_json(&request(10, "wire"))
            .to_request();

        let resp = test::call_service(&mut app, req).await;
        assert!(resp.status().is_client_error());
    }

    #[actix_web::test]
    async fn test_get_sponsor_by_id() {
        let mut app = init_service(create_test_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/sponsors")
            .set_json(&request(50, "paypal"))
            .to_request();

        let sponsor: Sponsor<String> = test::call_and_read_body_json(&mut app, req).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/sponsors/{}", sponsor.id))
            .to_request();

        let found: Sponsor<String> = test::call_and_read_body_json(&mut app, req).await;
        assert_eq!(found, sponsor);
    }
}
