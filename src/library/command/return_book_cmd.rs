use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::library::domain::LibraryService;

pub(crate) struct ReturnBookCommand {
    library_service: Box<dyn LibraryService>,
}

impl ReturnBookCommand {
    pub(crate) fn new(library_service: Box<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnBookCommandRequest {
    #[serde(default)]
    pub member_id: String,
    pub title: String,
}

impl ReturnBookCommandRequest {
    pub fn new(member_id: &str, title: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ReturnBookCommandResponse {
    pub member_id: String,
    pub borrowed_books: Vec<String>,
}

impl ReturnBookCommandResponse {
    pub fn new(member_id: &str, borrowed_books: Vec<String>) -> Self {
        Self {
            member_id: member_id.to_string(),
            borrowed_books,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        let mut patron = self.library_service.find_patron(req.member_id.as_str()).await
            .ok_or_else(|| CommandError::NotFound {
                message: format!("patron not found for {}", req.member_id),
            })?;
        self.library_service.return_borrowed_book(req.title.as_str(), &mut patron).await;
        let _ = self.library_service.save_patron(&patron).await
            .ok_or_else(|| CommandError::Database {
                message: format!("patron update failed for {}", req.member_id),
                reason_code: None,
            })?;
        Ok(ReturnBookCommandResponse::new(
            patron.member_id(), patron.get_borrowed_books().to_vec()))
    }
}
