use serde::{Deserialize, Serialize};

// Selects the backend for the patron record store. JsonFile persists a
// document file on disk; Memory keeps records in a process-shared list
// for local runs and tests.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    JsonFile,
    Memory,
}
