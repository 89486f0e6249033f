use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::library::domain::LibraryService;

pub(crate) struct GetEbooksCommand {
    library_service: Box<dyn LibraryService>,
}

impl GetEbooksCommand {
    pub(crate) fn new(library_service: Box<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetEbooksCommandRequest {
    pub title: String,
}

impl GetEbooksCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GetEbooksCommandResponse {
    pub title: String,
    pub available: bool,
    pub ebook_count: i64,
}

impl GetEbooksCommandResponse {
    pub fn new(title: &str, available: bool, ebook_count: i64) -> Self {
        Self {
            title: title.to_string(),
            available,
            ebook_count,
        }
    }
}

#[async_trait]
impl Command<GetEbooksCommandRequest, GetEbooksCommandResponse> for GetEbooksCommand {
    async fn execute(&self, req: GetEbooksCommandRequest) -> Result<GetEbooksCommandResponse, CommandError> {
        let available = self.library_service.is_ebook(req.title.as_str()).await;
        let ebook_count = self.library_service.get_ebooks_count(req.title.as_str()).await;
        Ok(GetEbooksCommandResponse::new(req.title.as_str(), available, ebook_count))
    }
}
