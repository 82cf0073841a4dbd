use actix_web::{
    get, post,
    web::{self, Json},
};
use chrono::Utc;
use common::entities::letter::{Letter, LetterStatus};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    contants::{DEFAULT_CATEGORY, DEFAULT_LOCATION},
    error::{Error, OuterError, Result},
    repositories::letter::LetterRepo,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostLetterRequest {
    pub child_name: String,
    pub age: u32,
    pub category: Option<String>,
    pub message: String,
    pub location: Option<String>,
    pub drawing_url: Option<String>,
}

#[utoipa::path(
    request_body(
        content = PostLetterRequest
    ),
    responses(
        (status = 200, body = Letter)
    )
)]
#[post("/api/letters")]
pub async fn post_letter(
    Json(data): web::Json<PostLetterRequest>,
    repo: web::Data<LetterRepo>,
) -> Result<Json<Letter<String>>> {
    if data.child_name.trim().is_empty() || data.message.trim().is_empty() {
        return Err(Error::Outer(OuterError::MissingRequiredFields));
    }

    let category = match data.category {
        Some(category) if !category.trim().is_empty() => category,
        _ => DEFAULT_CATEGORY.to_string(),
    };

    let location = match data.location {
        Some(location) if !location.trim().is_empty() => location,
        _ => DEFAULT_LOCATION.to_string(),
    };

    let letter = Letter {
        id: ObjectId::new(),
        child_name: data.child_name,
        age: data.age,
        category,
        message: data.message,
        location,
        drawing_url: data.drawing_url,
        status: LetterStatus::Pending,
        sponsor_id: None,
        sponsor_name: None,
        created_at: Utc::now().timestamp_micros(),
        coordinates: None,
    };

    repo.create(&letter).await?;

    Ok(Json(letter.stringify()))
}

#[utoipa::path(
    responses(
        (status = 200, body = [Letter])
    )
)]
#[get("/api/letters")]
pub async fn get_letters(repo: web::Data<LetterRepo>) -> Result<Json<Vec<Letter<String>>>> {
    let letters = repo.find_all().await?;

    Ok(Json(letters.into_iter().map(Letter::stringify).collect()))
}

#[cfg(test)]
mod tests {
    use actix_web::test::{self, init_service};
    use common::entities::letter::{Letter, LetterStatus};

    use super::PostLetterRequest;
    use crate::create_test_app;

    fn request(child_name: &str, message: &str) -> PostLetterRequest {
        PostLetterRequest {
            child_name: child_name.to_string(),
            age: 7,
            category: None,
            message: message.to_string(),
            location: None,
            drawing_url: None,
        }
    }

    #[actix_web::test]
    async fn test_post_letter_applies_fallbacks() {
        let mut app = init_service(create_test_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/letters")
            .set_json(&PostLetterRequest {
                child_name: "Emma".to_string(),
                age: 7,
                category: None,
                message: "Hi".to_string(),
                location: Some("".to_string()),
                drawing_url: None,
            })
            .to_request();

        let letter: Letter<String> = test::call_and_read_body_json(&mut app, req).await;

        assert_eq!(letter.category, "other");
        assert_eq!(letter.location, "Unknown");
        assert_eq!(letter.status, LetterStatus::Pending);
        assert_eq!(letter.sponsor_id, None);
    }

    #[actix_web::test]
    async fn test_post_letter_keeps_given_fields() {
        let mut app = init_service(create_test_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/letters")
            .set_json(&PostLetterRequest {
                child_name: "Lucas".to_string(),
                age: 9,
                category: Some("books".to_string()),
                message: "I love reading adventure books".to_string(),
                location: Some("London, UK".to_string()),
                drawing_url: Some("http://localhost:3004/api/files/name/letters/1_dino.png".to_string()),
            })
            .to_request();

        let letter: Letter<String> = test::call_and_read_body_json(&mut app, req).await;

        assert_eq!(letter.category, "books");
        assert_eq!(letter.location, "London, UK");
        assert!(letter.drawing_url.is_some());
    }

    #[actix_web::test]
    async fn test_post_letter_without_required_fields() {
        let mut app = init_service(create_test_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/letters")
            .set_json(&request("", "Hi"))
            .to_request();

        let resp = test::call_service(&mut app, req).await;
        assert!(resp.status().is_client_error());

        let req = test::TestRequest::post()
            .uri("/api/letters")
            .set_json(&request("Emma", "  "))
            .to_request();

        let resp = test::call_service(&mut app, req).await;
        assert!(resp.status().is_client_error());
    }

    #[actix_web::test]
    async fn test_get_letters_newest_first() {
        let mut app = init_service(create_test_app()).await;

        for name in ["Emma", "Lucas", "Sofia"] {
            let req = test::TestRequest::post()
                .uri("/api/letters")
                .set_json(&request(name, "Hi"))
                .to_request();
            let resp = test::call_service(&mut app, req).await;
            assert!(resp.status().is_success());
        }

        let req = test::TestRequest::get().uri("/api/letters").to_request();
        let letters: Vec<Letter<String>> = test::call_and_read_body_json(&mut app, req).await;

        assert_eq!(letters.len(), 3);
        assert!(letters
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
    }
}
