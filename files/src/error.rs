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
    Upload(UploadError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum OuterError {
    #[display(fmt = "File is too large, the limit is 5MB")]
    FileTooLarge,
    #[display(fmt = "Only image uploads are accepted")]
    UnsupportedFileType,
    #[display(fmt = "No file part in the upload")]
    MissingFile,
    #[display(fmt = "File not found")]
    FileNotFound,
    #[display(fmt = "Invalid identifier")]
    InvalidId,
}

/// Storage faults surfaced to the caller, keyed off what the filesystem
/// reported. Each kind keeps a distinguishable message.
#[derive(Debug, Display, Error)]
pub enum UploadError {
    #[display(fmt = "You are not allowed to store files here")]
    Unauthorized,
    #[display(fmt = "The upload was canceled before it finished")]
    Canceled,
    #[display(fmt = "Something went wrong while storing the file")]
    Unknown,
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

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => Error::Upload(UploadError::Unauthorized),
            std::io::ErrorKind::Interrupted => Error::Upload(UploadError::Canceled),
            _ => Error::Upload(UploadError::Unknown),
        }
    }
}

impl From<actix_multipart::MultipartError> for Error {
    fn from(err: actix_multipart::MultipartError) -> Self {
        match err {
            actix_multipart::MultipartError::Incomplete => Error::Upload(UploadError::Canceled),
            _ => Error::Upload(UploadError::Unknown),
        }
    }
}

impl ResponseError for Error {
    fn error_response(&self) -> HttpResponse {
        match self {
            Error::Inner(err) => log::error!("File metadata persistence error: {}", err),
            Error::Upload(err) => log::error!("File storage error: {}", err),
            Error::Outer(_) => {}
        }

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::html())
            .body(self.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            Error::Inner(_) | Error::Upload(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Outer(_) => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, UploadError};

    fn classify(kind: std::io::ErrorKind) -> Error {
        std::io::Error::from(kind).into()
    }

    #[test]
    fn test_storage_faults_keep_distinguishable_messages() {
        assert!(matches!(
            classify(std::io::ErrorKind::PermissionDenied),
            Error::Upload(UploadError::Unauthorized)
        ));
        assert!(matches!(
            classify(std::io::ErrorKind::Interrupted),
            Error::Upload(UploadError::Canceled)
        ));
        assert!(matches!(
            classify(std::io::ErrorKind::OutOfMemory),
            Error::Upload(UploadError::Unknown)
        ));

        let messages = [
            classify(std::io::ErrorKind::PermissionDenied).to_string(),
            classify(std::io::ErrorKind::Interrupted).to_string(),
            classify(std::io::ErrorKind::OutOfMemory).to_string(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
    }
}
