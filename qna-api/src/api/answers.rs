use super::AppState;
use crate::error::AppError;
use crate::services::AnswerService;
use actix_web::{web, HttpResponse, Result};
use shared_types::CreateAnswerRequest;

pub async fn create_answer(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    request: web::Json<CreateAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let question_id = path.into_inner();
    let create_req = request.into_inner();
    create_req.validate().map_err(AppError::Validation)?;

    let service = AnswerService::new(data.database.clone());
    let answer = service.create_answer(question_id, create_req).await?;
    Ok(HttpResponse::Ok().json(answer))
}

pub async fn get_answer(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let answer_id = path.into_inner();
    let service = AnswerService::new(data.database.clone());
    let answer = service.get_answer(answer_id).await?;
    Ok(HttpResponse::Ok().json(answer))
}

pub async fn delete_answer(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let answer_id = path.into_inner();
    let service = AnswerService::new(data.database.clone());
    service.delete_answer(answer_id).await?;
    Ok(HttpResponse::Ok().finish())
}
