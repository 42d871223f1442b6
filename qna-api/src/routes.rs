//! Route table for the qna API, shared by the server binary and the tests.

use crate::api::{answers, health, questions};
use crate::error::{json_error_handler, path_error_handler};
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::resource("/questions/")
                .route(web::get().to(questions::list_questions))
                .route(web::post().to(questions::create_question)),
        )
        .service(
            web::resource("/questions/{id}")
                .route(web::get().to(questions::get_question))
                .route(web::delete().to(questions::delete_question)),
        )
        .route(
            "/questions/{question_id}/answers/",
            web::post().to(answers::create_answer),
        )
        .service(
            web::resource("/answers/{id}")
                .route(web::get().to(answers::get_answer))
                .route(web::delete().to(answers::delete_answer)),
        );
}
