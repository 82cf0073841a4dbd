pub mod contants;
pub mod error;
pub mod handlers;
pub mod repositories;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::ServiceFactory;
use actix_web::dev::ServiceRequest;
use actix_web::dev::ServiceResponse;
use actix_web::middleware;
use actix_web::web;
use actix_web::App;

use common::repository::test_repository::TestRepository;
pub use handlers::letter::*;
use repositories::letter::LetterRepo;

pub fn create_app(
    letter_repo: LetterRepo,
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
        .app_data(web::Data::new(letter_repo))
        .service(post_letter)
        .service(get_letters);
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
    let letter_repo = LetterRepo::new(TestRepository::new());

    create_app(letter_repo)
}
