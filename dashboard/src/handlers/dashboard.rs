use actix_web::{
    get, post,
    web::{self, Json},
};
use common::entities::{
    letter::{Letter, LetterStatus},
    sponsor::Sponsor,
};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{Error, OuterError, Result},
    repositories::{letter::LetterRepo, sponsor::SponsorRepo},
    service::{filter::LetterFilter, update::LetterUpdate},
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LetterFilterQuery {
    pub category: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
}

impl LetterFilterQuery {
    fn into_filter(self) -> Result<LetterFilter> {
        let status = match self.status.as_deref() {
            None | Some("all") => None,
            Some(value) => Some(
                value
                    .parse()
                    .map_err(|_| Error::Outer(OuterError::InvalidStatusFilter))?,
            ),
        };

        Ok(LetterFilter {
            category: self.category.filter(|category| category != "all"),
            status,
            search: self.search,
        })
    }
}

#[utoipa::path(
    params(
        ("category" = Option<String>, Query, description = "Category substring, or all"),
        ("status" = Option<String>, Query, description = "pending | accepted | delivered | all"),
        ("search" = Option<String>, Query, description = "Name or location substring"),
    ),
    responses(
        (status = 200, body = [Letter])
    )
)]
#[get("/api/dashboard/letters")]
pub async fn get_dashboard_letters(
    query: web::Query<LetterFilterQuery>,
    letter_repo: web::Data<LetterRepo>,
) -> Result<Json<Vec<Letter<String>>>> {
    let filter = query.into_inner().into_filter()?;

    let letters = letter_repo.find_all().await?;
    let letters = filter.apply(letters);

    Ok(Json(letters.into_iter().map(Letter::stringify).collect()))
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub total: usize,
    pub pending: usize,
    pub accepted: usize,
    pub delivered: usize,
}

#[utoipa::path(
    responses(
        (status = 200, body = DashboardStats)
    )
)]
#[get("/api/dashboard/stats")]
pub async fn get_dashboard_stats(
    letter_repo: web::Data<LetterRepo>,
) -> Result<Json<DashboardStats>> {
    let letters = letter_repo.find_all().await?;

    let count =
        |status: LetterStatus| letters.iter().filter(|letter| letter.status == status).count();

    Ok(Json(DashboardStats {
        total: letters.len(),
        pending: count(LetterStatus::Pending),
        accepted: count(LetterStatus::Accepted),
        delivered: count(LetterStatus::Delivered),
    }))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SponsorSummary {
    pub sponsor: Sponsor<String>,
    pub assigned_gifts: usize,
}

#[utoipa::path(
    responses(
        (status = 200, body = [SponsorSummary])
    )
)]
#[get("/api/dashboard/sponsors")]
pub async fn get_dashboard_sponsors(
    letter_repo: web::Data<LetterRepo>,
    sponsor_repo: web::Data<SponsorRepo>,
) -> Result<Json<Vec<SponsorSummary>>> {
    let (sponsors, letters) = futures::try_join!(sponsor_repo.find_all(), letter_repo.find_all())?;

    // The tally is counted from letters on every read, never decremented
    // from the pledged gift count.
    let summaries = sponsors
        .into_iter()
        .map(|sponsor| {
            let assigned_gifts = letters
                .iter()
                .filter(|letter| letter.sponsor_id == Some(sponsor.id))
                .count();

            SponsorSummary {
                sponsor: sponsor.stringify(),
                assigned_gifts,
            }
        })
        .collect();

    Ok(Json(summaries))
}

async fn apply_update(
    repo: &LetterRepo,
    id: ObjectId,
    update: LetterUpdate,
) -> Result<Json<Letter<String>>> {
    let Some(mut letter) = repo.update(&id, update.to_document()).await? else {
        return Err(Error::Outer(OuterError::LetterNotFound));
    };

    update.apply(&mut letter);

    Ok(Json(letter.stringify()))
}

#[utoipa::path(
    responses(
        (status = 200, body = Letter)
    )
)]
#[post("/api/dashboard/letters/{id}/accept")]
pub async fn accept_letter(
    id: web::Path<String>,
    letter_repo: web::Data<LetterRepo>,
) -> Result<Json<Letter<String>>> {
    apply_update(&letter_repo, id.parse()?, LetterUpdate::Accept).await
}

#[utoipa::path(
    responses(
        (status = 200, body = Letter)
    )
)]
#[post("/api/dashboard/letters/{id}/deliver")]
pub async fn deliver_letter(
    id: web::Path<String>,
    letter_repo: web::Data<LetterRepo>,
) -> Result<Json<Letter<String>>> {
    apply_update(&letter_repo, id.parse()?, LetterUpdate::Deliver).await
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignSponsorRequest {
    pub sponsor_id: String,
}

#[utoipa::path(
    request_body(
        content = AssignSponsorRequest
    ),
    responses(
        (status = 200, body = Letter)
    )
)]
#[post("/api/dashboard/letters/{id}/assign")]
pub async fn assign_sponsor(
    id: web::Path<String>,
    Json(data): web::Json<AssignSponsorRequest>,
    letter_repo: web::Data<LetterRepo>,
    sponsor_repo: web::Data<SponsorRepo>,
) -> Result<Json<Letter<String>>> {
    let Some(sponsor) = sponsor_repo.find(data.sponsor_id.parse()?).await? else {
        return Err(Error::Outer(OuterError::SponsorNotFound));
    };

    let update = LetterUpdate::Assign {
        sponsor_id: sponsor.id,
        sponsor_name: sponsor.company_name,
    };

    apply_update(&letter_repo, id.parse()?, update).await
}
