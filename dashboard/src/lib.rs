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
pub use handlers::dashboard::*;
use repositories::letter::LetterRepo;
use repositories::sponsor::SponsorRepo;

pub fn create_app(
    letter_repo: LetterRepo,
    sponsor_repo: SponsorRepo,
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
        .app_data(web::Data::new(sponsor_repo))
        .service(get_dashboard_letters)
        .service(get_dashboard_stats)
        .service(get_dashboard_sponsors)
        .service(accept_letter)
        .service(deliver_letter)
        .service(assign_sponsor);
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
    let sponsor_repo = SponsorRepo::new(TestRepository::new());

    create_app(letter_repo, sponsor_repo)
}
