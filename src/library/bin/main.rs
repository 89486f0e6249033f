include!("../../lib.rs");
use std::net::SocketAddr;
use axum::{
    routing::{get, post},
    Router,
};
use crate::core::controller::AppState;
use crate::core::repository::RepositoryStore;
use crate::library::controller::{borrow_book, find_book_by_author, find_book_languages, find_ebooks, find_patron_by_id, register_patron, return_borrowed_book};
use crate::utils::http::setup_tracing;

const DEFAULT_DB_PATH: &str = "library_db.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let db_path = std::env::var("LIBRARY_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    let state = AppState::new(db_path.as_str(), RepositoryStore::JsonFile);

    let app = Router::new()
        .route("/patrons", post(register_patron))
        .route("/patrons/:member_id", get(find_patron_by_id))
        .route("/patrons/:member_id/borrow", post(borrow_book))
        .route("/patrons/:member_id/return", post(return_borrowed_book))
        .route("/books/ebooks", get(find_ebooks))
        .route("/books/languages", get(find_book_languages))
        .route("/books/by-author", get(find_book_by_author))
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("listening on {}", addr);
    axum::Server::bind(&addr).serve(app.into_make_service()).await?;
    Ok(())
}
