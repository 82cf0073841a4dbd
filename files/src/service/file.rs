use std::{fs::File, io::Write, path::Path};

use actix_files::NamedFile;
use actix_multipart::Multipart;
use chrono::Utc;
use common::entities::file::Metadata;
use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;

use crate::{
    contants::{ALLOWED_CONTENT_PREFIX, MAX_UPLOAD_SIZE},
    error::{Error, OuterError, Result},
    repositories::meta::MetaRepo,
};

pub const STORAGE_ROOT: &str = "/santa-files";

pub struct UploadedFile {
    pub original_name: Option<String>,
    pub content_type: String,
    pub content: Vec<u8>,
}

pub struct FileService {
    metas: MetaRepo,
}

impl FileService {
    pub fn new(metas: MetaRepo) -> Self {
        Self { metas }
    }

    pub async fn create_file(&self, collection: String, mut payload: Multipart) -> Result<Metadata> {
        let Some(file) = read_upload(&mut payload).await? else {
            return Err(Error::Outer(OuterError::MissingFile));
        };

        // Both checks run before anything touches disk or the meta store.
        validate_upload(&file)?;

        let name = file
            .original_name
            .clone()
            .unwrap_or_else(|| "upload".to_string());
        let path = format!("{}/{}_{}", collection, Utc::now().timestamp_millis(), name);

        let full_path = format!("{}/{}", STORAGE_ROOT, path);
        let full_path = Path::new(&full_path);

        if let Some(prefix) = full_path.parent() {
            std::fs::create_dir_all(prefix)?;
        }

        let mut out = File::create(full_path)?;
        out.write_all(&file.content)?;

        let meta = Metadata {
            id: ObjectId::new(),
            path,
            original_name: file.original_name,
            content_type: file.content_type,
            size: file.content.len() as i64,
            created_at: Utc::now().timestamp_micros(),
        };

        self.metas.create(&meta).await?;

        Ok(meta)
    }

    pub async fn find_file(&self, path: String) -> Result<NamedFile> {
        let Some(meta) = self.metas.find_by_path(&path).await? else {
            return Err(Error::Outer(OuterError::FileNotFound));
        };

        let file = NamedFile::open_async(format!("{}/{}", STORAGE_ROOT, meta.path)).await?;

        Ok(file)
    }

    pub async fn get_meta_by_id(&self, id: ObjectId) -> Result<Metadata> {
        let Some(meta) = self.metas.find(id).await? else {
            return Err(Error::Outer(OuterError::FileNotFound));
        };

        Ok(meta)
    }
}

async fn read_upload(payload: &mut Multipart) -> Result<Option<UploadedFile>> {
    while let Some(mut field) = payload.try_next().await? {
        if field.name() != "file" {
            continue;
        }

        let content_type = field
            .content_type()
            .map(|mime| mime.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let original_name = field
            .content_disposition()
            .get_filename()
            .map(str::to_string);

        let mut content = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            if content.len() + chunk.len() > MAX_UPLOAD_SIZE {
                return Err(Error::Outer(OuterError::FileTooLarge));
            }
            content.extend_from_slice(&chunk);
        }

        return Ok(Some(UploadedFile {
            original_name,
            content_type,
            content,
        }));
    }

    Ok(None)
}

pub fn validate_upload(file: &UploadedFile) -> Result<()> {
    if file.content.len() > MAX_UPLOAD_SIZE {
        return Err(Error::Outer(OuterError::FileTooLarge));
    }

    if !file.content_type.starts_with(ALLOWED_CONTENT_PREFIX) {
        return Err(Error::Outer(OuterError::UnsupportedFileType));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::error::{Error, OuterError};

    use super::{validate_upload, UploadedFile};

    fn upload(content_type: &str, size: usize) -> UploadedFile {
        UploadedFile {
            original_name: Some("dino.png".to_string()),
            content_type: content_type.to_string(),
            content: vec![0; size],
        }
    }

    #[test]
    fn test_oversized_upload_is_rejected() {
        let result = validate_upload(&upload("image/png", 6 * 1024 * 1024));
        assert!(matches!(
            result,
            Err(Error::Outer(OuterError::FileTooLarge))
        ));
    }

    #[test]
    fn test_non_image_upload_is_rejected() {
        let result = validate_upload(&upload("text/plain", 128));
        assert!(matches!(
            result,
            Err(Error::Outer(OuterError::UnsupportedFileType))
        ));
    }

    #[test]
    fn test_small_image_upload_passes() {
        assert!(validate_upload(&upload("image/jpeg", 512 * 1024)).is_ok());
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        assert!(validate_upload(&upload("image/png", 5 * 1024 * 1024)).is_ok());
    }
}
