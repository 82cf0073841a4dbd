use std::env;

use actix_web::HttpServer;
use common::{entities::sponsor::Sponsor, repository::mongo_repository::MongoRepository};
use mongodb::bson::oid::ObjectId;
use sponsors::{create_app, repositories::sponsor::SponsorRepo};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let mongo_uri = env::var("MONGOURI").unwrap();

    let sponsor_repo: MongoRepository<Sponsor<ObjectId>> =
        MongoRepository::new(&mongo_uri, "santa", "sponsors").await;
    let sponsor_repo = SponsorRepo::new(sponsor_repo);

    HttpServer::new(move || create_app(sponsor_repo.clone()))
        .bind(("0.0.0.0", 3002))?
        .run()
        .await
}
