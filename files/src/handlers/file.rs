use actix_files::NamedFile;
use actix_multipart::Multipart;
use actix_web::{
    get, post,
    web::{self, Json, Path},
};
use common::entities::file::Metadata;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    contants::FILES_SERVICE,
    error::Result,
    repositories::meta::MetaRepo,
    service::file::FileService,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFileResponse {
    pub id: String,
    pub url: String,
}

#[utoipa::path(
    responses(
        (status = 200, body = CreateFileResponse)
    )
)]
#[post("/api/files/{collection}")]
pub async fn create_file(
    collection: Path<String>,
    payload: Multipart,
    repo: web::Data<MetaRepo>,
) -> Result<Json<CreateFileResponse>> {
    let meta = FileService::new(repo.get_ref().clone())
        .create_file(collection.into_inner(), payload)
        .await?;

    Ok(Json(CreateFileResponse {
        id: meta.id.to_hex(),
        url: format!("{}/api/files/name/{}", *FILES_SERVICE, meta.path),
    }))
}

#[utoipa::path(
    responses(
        (status = 200, description = "The stored blob")
    )
)]
#[get("/api/files/name/{path:.*}")]
pub async fn find_file(path: Path<String>, repo: web::Data<MetaRepo>) -> Result<NamedFile> {
    FileService::new(repo.get_ref().clone())
        .find_file(path.into_inner())
        .await
}

#[utoipa::path(
    responses(
        (status = 200, body = Metadata)
    )
)]
#[get("/api/files/meta/{id}")]
pub async fn get_meta_by_id(id: Path<String>, repo: web::Data<MetaRepo>) -> Result<Json<Metadata>> {
    Ok(Json(
        FileService::new(repo.get_ref().clone())
            .get_meta_by_id(id.parse()?)
            .await?,
    ))
}
