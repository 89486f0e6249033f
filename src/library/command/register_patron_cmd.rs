use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::library::domain::LibraryService;

pub(crate) struct RegisterPatronCommand {
    library_service: Box<dyn LibraryService>,
}

impl RegisterPatronCommand {
    pub(crate) fn new(library_service: Box<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterPatronCommandRequest {
    pub fname: String,
    pub lname: String,
    pub age: i64,
    #[serde(rename = "memberID")]
    pub member_id: String,
}

impl RegisterPatronCommandRequest {
    pub fn new(fname: &str, lname: &str, age: i64, member_id: &str) -> Self {
        Self {
            fname: fname.to_string(),
            lname: lname.to_string(),
            age,
            member_id: member_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterPatronCommandResponse {
    pub doc_id: usize,
}

impl RegisterPatronCommandResponse {
    pub fn new(doc_id: usize) -> Self {
        Self {
            doc_id,
        }
    }
}

#[async_trait]
impl Command<RegisterPatronCommandRequest, RegisterPatronCommandResponse> for RegisterPatronCommand {
    async fn execute(&self, req: RegisterPatronCommandRequest) -> Result<RegisterPatronCommandResponse, CommandError> {
        match self.library_service.register_patron(
            req.fname.as_str(), req.lname.as_str(), req.age, req.member_id.as_str()).await {
            Ok(Some(doc_id)) => Ok(RegisterPatronCommandResponse::new(doc_id)),
            Ok(None) => Err(CommandError::DuplicateKey {
                message: format!("patron already registered for {}", req.member_id),
            }),
            Err(err) => Err(CommandError::from(err)),
        }
    }
}
