use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::library::domain::LibraryService;

pub(crate) struct BorrowBookCommand {
    library_service: Box<dyn LibraryService>,
}

impl BorrowBookCommand {
    pub(crate) fn new(library_service: Box<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BorrowBookCommandRequest {
    #[serde(default)]
    pub member_id: String,
    pub title: String,
}

impl BorrowBookCommandRequest {
    pub fn new(member_id: &str, title: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BorrowBookCommandResponse {
    pub member_id: String,
    pub borrowed_books: Vec<String>,
}

impl BorrowBookCommandResponse {
    pub fn new(member_id: &str, borrowed_books: Vec<String>) -> Self {
        Self {
            member_id: member_id.to_string(),
            borrowed_books,
        }
    }
}

#[async_trait]
impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand {
    async fn execute(&self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        let mut patron = self.library_service.find_patron(req.member_id.as_str()).await
            .ok_or_else(|| CommandError::NotFound {
                message: format!("patron not found for {}", req.member_id),
            })?;
        self.library_service.borrow_book(req.title.as_str(), &mut patron).await;
        // borrowing only mutates the entity; durability needs the store write
        let _ = self.library_service.save_patron(&patron).await
            .ok_or_else(|| CommandError::Database {
                message: format!("patron update failed for {}", req.member_id),
                reason_code: None,
            })?;
        Ok(BorrowBookCommandResponse::new(
            patron.member_id(), patron.get_borrowed_books().to_vec()))
    }
}
