use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::Value;
use crate::core::command::Command;
use crate::core::controller::{json_to_server_error, AppState, ServerError};
use crate::library::command::book_by_author_cmd::{BookByAuthorCommand, BookByAuthorCommandRequest, BookByAuthorCommandResponse};
use crate::library::command::book_languages_cmd::{BookLanguagesCommand, BookLanguagesCommandRequest, BookLanguagesCommandResponse};
use crate::library::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest, BorrowBookCommandResponse};
use crate::library::command::get_ebooks_cmd::{GetEbooksCommand, GetEbooksCommandRequest, GetEbooksCommandResponse};
use crate::library::command::get_patron_cmd::{GetPatronCommand, GetPatronCommandRequest, GetPatronCommandResponse};
use crate::library::command::register_patron_cmd::{RegisterPatronCommand, RegisterPatronCommandRequest, RegisterPatronCommandResponse};
use crate::library::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, ReturnBookCommandResponse};
use crate::library::domain::LibraryService;
use crate::library::factory;

async fn build_service(state: AppState) -> Box<dyn LibraryService> {
    factory::create_library_service(&state.config, state.store).await
}

pub(crate) async fn register_patron(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<RegisterPatronCommandResponse>, ServerError> {
    let req: RegisterPatronCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = RegisterPatronCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_patron_by_id(
    State(state): State<AppState>,
    Path(member_id): Path<String>) -> Result<Json<GetPatronCommandResponse>, ServerError> {
    let req = GetPatronCommandRequest { member_id };
    let svc = build_service(state).await;
    let res = GetPatronCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn borrow_book(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
    json: Json<Value>) -> Result<Json<BorrowBookCommandResponse>, ServerError> {
    let mut req: BorrowBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.member_id = member_id;
    let svc = build_service(state).await;
    let res = BorrowBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn return_borrowed_book(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
    json: Json<Value>) -> Result<Json<ReturnBookCommandResponse>, ServerError> {
    let mut req: ReturnBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.member_id = member_id;
    let svc = build_service(state).await;
    let res = ReturnBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_ebooks(
    State(state): State<AppState>,
    Query(req): Query<GetEbooksCommandRequest>) -> Result<Json<GetEbooksCommandResponse>, ServerError> {
    let svc = build_service(state).await;
    let res = GetEbooksCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_languages(
    State(state): State<AppState>,
    Query(req): Query<BookLanguagesCommandRequest>) -> Result<Json<BookLanguagesCommandResponse>, ServerError> {
    let svc = build_service(state).await;
    let res = BookLanguagesCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_author(
    State(state): State<AppState>,
    Query(req): Query<BookByAuthorCommandRequest>) -> Result<Json<BookByAuthorCommandResponse>, ServerError> {
    let svc = build_service(state).await;
    let res = BookByAuthorCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
