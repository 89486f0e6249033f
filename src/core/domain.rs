use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the library service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub db_path: String,
    pub catalog_base_url: String,
}

impl Configuration {
    pub fn new(db_path: &str) -> Self {
        Configuration {
            db_path: db_path.to_string(),
            catalog_base_url: "http://openlibrary.org".to_string(),
        }
    }

    pub fn with_catalog_base_url(mut self, base_url: &str) -> Self {
        self.catalog_base_url = base_url.to_string();
        self
    }
}
