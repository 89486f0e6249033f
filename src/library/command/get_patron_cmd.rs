use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::library::domain::LibraryService;
use crate::patrons::dto::PatronDto;

pub(crate) struct GetPatronCommand {
    library_service: Box<dyn LibraryService>,
}

impl GetPatronCommand {
    pub(crate) fn new(library_service: Box<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetPatronCommandRequest {
    pub(crate) member_id: String,
}

impl GetPatronCommandRequest {
    pub fn new(member_id: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GetPatronCommandResponse {
    pub patron: PatronDto,
}

impl GetPatronCommandResponse {
    pub fn new(patron: PatronDto) -> Self {
        Self {
            patron,
        }
    }
}

#[async_trait]
impl Command<GetPatronCommandRequest, GetPatronCommandResponse> for GetPatronCommand {
    async fn execute(&self, req: GetPatronCommandRequest) -> Result<GetPatronCommandResponse, CommandError> {
        self.library_service.find_patron(req.member_id.as_str()).await
            .map(|patron| GetPatronCommandResponse::new(PatronDto::from(&patron)))
            .ok_or_else(|| CommandError::NotFound {
                message: format!("patron not found for {}", req.member_id),
            })
    }
}
