use actix_web::{HttpResponse, Responder, get, post, web};
use chrono::Local;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ten40_core::money::parse_amount;
use ten40_core::{FilingStatus, TaxCalculator, TaxResult, validate_input};
use ten40_form::{FormData, render_form};
use tracing::{error, info};

use crate::state::AppState;

const GENERIC_ERROR: &str = "An unexpected error occurred. Please try again.";
const PARSE_ERROR: &str = "Invalid input data. Please check your entries.";

/// Raw form inputs as the browser sends them: strings, not numbers, so the
/// validator can report malformed entries instead of a 400 from the JSON
/// decoder.
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub income: String,
    #[serde(default)]
    pub deductions: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub withheld: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorReply {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub income: Decimal,
    pub deductions: Decimal,
    pub status: FilingStatus,
    pub withheld: Decimal,
    #[serde(flatten)]
    pub result: TaxResult,
    pub calculation_date: String,
}

#[post("/calculate")]
pub async fn calculate(
    state: web::Data<AppState>,
    body: web::Json<CalculateRequest>,
) -> impl Responder {
    let outcome = validate_input(&body.income, &body.deductions, &body.status, Some(&body.withheld));
    if !outcome.valid {
        let error = outcome.error.unwrap_or_else(|| PARSE_ERROR.to_string());
        return HttpResponse::BadRequest().json(ErrorReply { error });
    }

    // Validation passed, so the parses below cannot fail; the guard stays as
    // the outermost net for anything unexpected.
    let parsed = (
        parse_amount(&body.income),
        parse_amount(&body.deductions),
        parse_amount(&body.withheld),
        FilingStatus::parse(&body.status),
    );
    let (Ok(income), Ok(deductions), Ok(withheld), Some(status)) = parsed else {
        return HttpResponse::BadRequest().json(ErrorReply {
            error: PARSE_ERROR.to_string(),
        });
    };

    let calculator = TaxCalculator::new(&state.config);
    match calculator
        .calculate(income, status, deductions, withheld, state.advice_provider())
        .await
    {
        Ok(result) => {
            info!(
                %income,
                status = status.as_str(),
                %withheld,
                "tax calculation completed"
            );
            HttpResponse::Ok().json(CalculateResponse {
                income,
                deductions,
                status,
                withheld,
                result,
                calculation_date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            })
        }
        Err(fault) => {
            error!(%fault, "unexpected error in tax calculation");
            HttpResponse::InternalServerError().json(ErrorReply {
                error: GENERIC_ERROR.to_string(),
            })
        }
    }
}

/// Same raw-string shape as [`CalculateRequest`]; kept separate so the two
/// endpoints can evolve independently.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub income: String,
    #[serde(default)]
    pub deductions: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub withheld: String,
}

#[post("/api/validate")]
pub async fn validate(body: web::Json<ValidateRequest>) -> impl Responder {
    let outcome = validate_input(&body.income, &body.deductions, &body.status, Some(&body.withheld));
    HttpResponse::Ok().json(outcome)
}

#[post("/generate_form")]
pub async fn generate_form(
    state: web::Data<AppState>,
    body: web::Json<FormData>,
) -> impl Responder {
    let prepared_on = Local::now().format("%m/%d/%Y").to_string();
    let document = render_form(&body, state.config.tax_year, &prepared_on);

    let filename = format!("tax_form_{}.html", Local::now().format("%Y%m%d_%H%M%S"));
    info!(%filename, "tax form generated");

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename={filename}"),
        ))
        .body(document)
}

#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}
