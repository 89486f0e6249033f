use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::library::domain::LibraryService;

pub(crate) struct BookLanguagesCommand {
    library_service: Box<dyn LibraryService>,
}

impl BookLanguagesCommand {
    pub(crate) fn new(library_service: Box<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BookLanguagesCommandRequest {
    pub title: String,
}

impl BookLanguagesCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BookLanguagesCommandResponse {
    pub title: String,
    pub languages: Vec<String>,
}

impl BookLanguagesCommandResponse {
    pub fn new(title: &str, languages: Vec<String>) -> Self {
        Self {
            title: title.to_string(),
            languages,
        }
    }
}

#[async_trait]
impl Command<BookLanguagesCommandRequest, BookLanguagesCommandResponse> for BookLanguagesCommand {
    async fn execute(&self, req: BookLanguagesCommandRequest) -> Result<BookLanguagesCommandResponse, CommandError> {
        let mut languages: Vec<String> = self.library_service
            .get_languages_for_book(req.title.as_str()).await
            .into_iter().collect();
        // sets have no order; keep the wire answer stable
        languages.sort();
        Ok(BookLanguagesCommandResponse::new(req.title.as_str(), languages))
    }
}
