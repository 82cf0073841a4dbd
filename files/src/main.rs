use std::env;

use actix_web::HttpServer;
use common::{entities::file::Metadata, repository::mongo_repository::MongoRepository};
use files::{create_app, repositories::meta::MetaRepo};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let mongo_uri = env::var("MONGOURI").unwrap();

    let meta_repo: MongoRepository<Metadata> =
        MongoRepository::new(&mongo_uri, "santa", "files").await;
    let meta_repo = MetaRepo::new(meta_repo);

    HttpServer::new(move || create_app(meta_repo.clone()))
        .bind(("0.0.0.0", 3004))?
        .run()
        .await
}
