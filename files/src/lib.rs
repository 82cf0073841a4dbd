pub mod contants;
pub mod error;
pub mod handlers;
pub mod repositories;
pub mod service;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::ServiceFactory;
use actix_web::dev::ServiceRequest;
use actix_web::dev::ServiceResponse;
use actix_web::middleware;
use actix_web::web;
use actix_web::App;

use common::repository::test_repository::TestRepository;
pub use handlers::file::*;
use repositories::meta::MetaRepo;

pub fn create_app(
    meta_repo: MetaRepo,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    let cors = Cors::permissive();
    let app = App::new()
        .wrap(cors)
        .wrap(middleware::Logger::default())
        .app_data(web::Data::new(meta_repo))
        .service(create_file)
        .service(find_file)
        .service(get_meta_by_id);
    app
}

pub fn create_test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    let meta_repo = MetaRepo::new(TestRepository::new());

    create_app(meta_repo)
}
