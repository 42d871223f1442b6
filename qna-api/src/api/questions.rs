use super::AppState;
use crate::error::AppError;
use crate::services::QuestionService;
use actix_web::{web, HttpResponse, Result};
use shared_types::CreateQuestionRequest;

pub async fn list_questions(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let service = QuestionService::new(data.database.clone());
    let questions = service.list_questions().await?;
    Ok(HttpResponse::Ok().json(questions))
}

pub async fn create_question(
    data: web::Data<AppState>,
    request: web::Json<CreateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let create_req = request.into_inner();
    create_req.validate().map_err(AppError::Validation)?;

    let service = QuestionService::new(data.database.clone());
    let question = service.create_question(create_req).await?;
    Ok(HttpResponse::Ok().json(question))
}

pub async fn get_question(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let question_id = path.into_inner();
    let service = QuestionService::new(data.database.clone());
    let question = service.get_question(question_id).await?;
    Ok(HttpResponse::Ok().json(question))
}

pub async fn delete_question(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let question_id = path.into_inner();
    let service = QuestionService::new(data.database.clone());
    service.delete_question(question_id).await?;
    Ok(HttpResponse::Ok().finish())
}
