//! Reporting agency directory endpoints.

use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::data::{agencies_by_type, agency_by_id, all_agencies, AgencyType, ReportingAgency};
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, IntoParams)]
pub struct AgencyQuery {
    /// Filter by agency category (credit/consumer/employment/tenant).
    pub r#type: Option<String>,
}

/// List reporting agencies, optionally filtered by category.
///
/// GET /agencies?type=credit
#[utoipa::path(
    get,
    path = "/api/v1/agencies",
    tag = "Agencies",
    params(AgencyQuery),
    responses(
        (status = 200, description = "Agencies", body = [ReportingAgency]),
        (status = 400, description = "Unknown agency type")
    )
)]
#[get("/agencies")]
pub async fn list_agencies(query: web::Query<AgencyQuery>) -> AppResult<HttpResponse> {
    let agencies = match &query.r#type {
        Some(type_str) => {
            let agency_type = AgencyType::parse(type_str).ok_or_else(|| {
                AppError::InvalidInput(format!("Unknown agency type '{}'", type_str))
            })?;
            agencies_by_type(agency_type)
        }
        None => all_agencies(),
    };

    Ok(HttpResponse::Ok().json(agencies))
}

/// Get one agency by id.
///
/// GET /agencies/{id}
#[utoipa::path(
    get,
    path = "/api/v1/agencies/{id}",
    tag = "Agencies",
    params(("id" = String, Path, description = "Agency ID, e.g. 'experian'")),
    responses(
        (status = 200, description = "Agency", body = ReportingAgency),
        (status = 404, description = "Agency not found")
    )
)]
#[get("/agencies/{id}")]
pub async fn get_agency(path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let agency =
        agency_by_id(&id).ok_or_else(|| AppError::NotFound(format!("Agency '{}'", id)))?;

    Ok(HttpResponse::Ok().json(agency))
}

/// Configure agency routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_agencies).service(get_agency);
}
