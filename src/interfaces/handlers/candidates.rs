use actix_multipart::form::MultipartForm;
use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    entities::candidate::{CandidateFilters, CandidateUpload, NewCandidate},
    errors::AppError,
    utils::filename::resume_extension,
    AppState,
};

#[post("/candidates")]
pub async fn create_candidate(
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<CandidateUpload>,
) -> Result<HttpResponse, AppError> {
    // The file-type gate fires before any field is parsed or validated,
    // so a bad extension always answers 415 even when fields are bad too.
    let original_filename = form.resume.file_name.clone();
    resume_extension(original_filename.as_deref().unwrap_or("resume"))?;

    let fields = NewCandidate::from_raw(
        form.full_name.into_inner(),
        &form.dob,
        &form.contact_number,
        form.address.into_inner(),
        form.qualification.into_inner(),
        form.graduation_year.into_inner(),
        form.years_of_experience.into_inner(),
        &form.skills,
    )?;

    let resume_bytes = tokio::fs::read(form.resume.file.path()).await?;

    let candidate = state
        .candidates
        .create(fields, original_filename.as_deref(), &resume_bytes)
        .await?;

    Ok(HttpResponse::Created().json(candidate))
}

#[get("/candidates")]
pub async fn list_candidates(
    state: web::Data<AppState>,
    filters: web::Query<CandidateFilters>,
) -> Result<HttpResponse, AppError> {
    let candidates = state.candidates.list(&filters).await?;
    Ok(HttpResponse::Ok().json(candidates))
}

#[get("/candidates/{id}")]
pub async fn get_candidate(
    state: web::Data<AppState>,
    id: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let candidate = state.candidates.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(candidate))
}

#[delete("/candidates/{id}")]
pub async fn delete_candidate(
    state: web::Data<AppState>,
    id: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    state.candidates.delete(id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "detail": "deleted successfully",
        "id": id
    })))
}
