use std::fs;
use std::path::Path;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::core::library::LibraryResult;

// Reads a whole document file. A missing file reads as the default
// (empty) document so a fresh store needs no setup step.
pub(crate) fn load_doc_file<T: DeserializeOwned + Default>(path: &Path) -> LibraryResult<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    let data = fs::read_to_string(path)?;
    if data.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_str(data.as_str())?)
}

// Rewrites the whole document file in place.
pub(crate) fn save_doc_file<T: Serialize>(path: &Path, docs: &T) -> LibraryResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let data = serde_json::to_string(docs)?;
    fs::write(path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::utils::store::{load_doc_file, save_doc_file};

    #[tokio::test]
    async fn test_should_load_default_for_missing_file() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("missing.json");
        let docs: HashMap<String, Vec<String>> = load_doc_file(path.as_path()).expect("should load");
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_should_save_and_load_docs() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("docs.json");
        let docs = HashMap::from([("patrons".to_string(), vec!["one".to_string(), "two".to_string()])]);
        save_doc_file(path.as_path(), &docs).expect("should save");
        let loaded: HashMap<String, Vec<String>> = load_doc_file(path.as_path()).expect("should load");
        assert_eq!(docs, loaded);
    }

    #[tokio::test]
    async fn test_should_create_parent_dirs_on_save() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("nested").join("docs.json");
        let docs = HashMap::from([("patrons".to_string(), Vec::<String>::new())]);
        save_doc_file(path.as_path(), &docs).expect("should save");
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_should_fail_on_malformed_file() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("bad.json");
        std::fs::write(path.as_path(), "not json").expect("should write");
        let res: crate::core::library::LibraryResult<HashMap<String, Vec<String>>> =
            load_doc_file(path.as_path());
        assert!(res.is_err());
    }
}
