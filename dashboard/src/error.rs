use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use common::inner_error::InnerError;
use derive_more::{Display, Error};
use mongodb::{bson::oid, error};

#[derive(Debug, Display, Error)]
pub enum Error {
    Inner(InnerError),
    Outer(OuterError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum OuterError {
    #[display(fmt = "Letter not found")]
    LetterNotFound,
    #[display(fmt = "Sponsor not found")]
    SponsorNotFound,
    #[display(fmt = "Status filter invalid value. Accepted values are: all, pending, accepted, delivered")]
    InvalidStatusFilter,
    #[display(fmt = "Invalid identifier")]
    InvalidId,
}

impl From<error::Error> for Error {
    fn from(err: error::Error) -> Self {
        Error::Inner(InnerError::MongoError(err))
    }
}

impl From<oid::Error> for Error {
    fn from(_: oid::Error) -> Self {
        Error::Outer(OuterError::InvalidId)
    }
}

impl From<OuterError> for Error {
    fn from(value: OuterError) -> Self {
        Error::Outer(value)
    }
}

impl ResponseError for Error {
    fn error_response(&self) -> HttpResponse {
        if let Error::Inner(err) = self {
            log::error!("Dashboard persistence error: {}", err);
        }

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::html())
            .body(self.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            Error::Inner(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Outer(_) => StatusCode::BAD_REQUEST,
        }
    }
}
