use std::env;

use actix_web::HttpServer;
use common::{entities::letter::Letter, repository::mongo_repository::MongoRepository};
use letters::{create_app, repositories::letter::LetterRepo};
use mongodb::bson::oid::ObjectId;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let mongo_uri = env::var("MONGOURI").unwrap();

    let letter_repo: MongoRepository<Letter<ObjectId>> =
        MongoRepository::new(&mongo_uri, "santa", "letters").await;
    let letter_repo = LetterRepo::new(letter_repo);

    HttpServer::new(move || create_app(letter_repo.clone()))
        .bind(("0.0.0.0", 3001))?
        .run()
        .await
}
