use std::env::var;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref FILES_SERVICE: String = var("FILES_SERVICE_URL").unwrap();
}

pub const MAX_UPLOAD_SIZE: usize = 5 * 1024 * 1024;
pub const ALLOWED_CONTENT_PREFIX: &str = "image/";
