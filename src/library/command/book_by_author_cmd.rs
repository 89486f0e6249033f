use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::library::domain::LibraryService;

pub(crate) struct BookByAuthorCommand {
    library_service: Box<dyn LibraryService>,
}

impl BookByAuthorCommand {
    pub(crate) fn new(library_service: Box<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BookByAuthorCommandRequest {
    pub author: String,
    pub title: String,
}

impl BookByAuthorCommandRequest {
    pub fn new(author: &str, title: &str) -> Self {
        Self {
            author: author.to_string(),
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BookByAuthorCommandResponse {
    pub author: String,
    pub title: String,
    pub matched: bool,
}

impl BookByAuthorCommandResponse {
    pub fn new(author: &str, title: &str, matched: bool) -> Self {
        Self {
            author: author.to_string(),
            title: title.to_string(),
            matched,
        }
    }
}

#[async_trait]
impl Command<BookByAuthorCommandRequest, BookByAuthorCommandResponse> for BookByAuthorCommand {
    async fn execute(&self, req: BookByAuthorCommandRequest) -> Result<BookByAuthorCommandResponse, CommandError> {
        let matched = self.library_service
            .is_book_by_author(req.author.as_str(), req.title.as_str()).await;
        Ok(BookByAuthorCommandResponse::new(req.author.as_str(), req.title.as_str(), matched))
    }
}
