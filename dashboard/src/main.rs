use std::env;

use actix_web::HttpServer;
use common::{
    entities::{letter::Letter, sponsor::Sponsor},
    repository::mongo_repository::MongoRepository,
};
use dashboard::{
    create_app,
    repositories::{letter::LetterRepo, sponsor::SponsorRepo},
};
use mongodb::bson::oid::ObjectId;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let mongo_uri = env::var("MONGOURI").unwrap();

    let letter_repo: MongoRepository<Letter<ObjectId>> =
        MongoRepository::new(&mongo_uri, "santa", "letters").await;
    let letter_repo = LetterRepo::new(letter_repo);

    let sponsor_repo: MongoRepository<Sponsor<ObjectId>> =
        MongoRepository::new(&mongo_uri, "santa", "sponsors").await;
    let sponsor_repo = SponsorRepo::new(sponsor_repo);

    HttpServer::new(move || create_app(letter_repo.clone(), sponsor_repo.clone()))
        .bind(("0.0.0.0", 3003))?
        .run()
        .await
}
