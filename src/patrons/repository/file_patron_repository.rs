use std::path::PathBuf;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::dto::PatronDto;
use crate::patrons::repository::PatronRepository;
use crate::utils::store::{load_doc_file, save_doc_file};

// Root document of the store file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PatronDocFile {
    #[serde(default)]
    patrons: Vec<PatronDto>,
}

// FilePatronRepository keeps patron records in one JSON document file,
// reloaded and rewritten per operation. Document ids are the 1-based
// position of a record in the file.
#[derive(Debug)]
pub(crate) struct FilePatronRepository {
    path: PathBuf,
}

impl FilePatronRepository {
    pub(crate) fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    fn load(&self) -> LibraryResult<Vec<PatronDto>> {
        let file: PatronDocFile = load_doc_file(self.path.as_path())?;
        Ok(file.patrons)
    }

    fn save(&self, patrons: Vec<PatronDto>) -> LibraryResult<()> {
        save_doc_file(self.path.as_path(), &PatronDocFile { patrons })
    }

    fn try_insert(&self, patron: &PatronEntity) -> LibraryResult<Option<usize>> {
        let mut patrons = self.load()?;
        if patrons.iter().any(|doc| doc.member_id == patron.member_id()) {
            return Ok(None);
        }
        patrons.push(PatronDto::from(patron));
        let doc_id = patrons.len();
        self.save(patrons)?;
        Ok(Some(doc_id))
    }

    fn try_update(&self, patron: &PatronEntity) -> LibraryResult<usize> {
        let mut patrons = self.load()?;
        let mut updated = 0;
        for doc in patrons.iter_mut() {
            if doc.member_id == patron.member_id() {
                *doc = PatronDto::from(patron);
                updated += 1;
            }
        }
        if updated > 0 {
            self.save(patrons)?;
        }
        Ok(updated)
    }
}

#[async_trait]
impl PatronRepository for FilePatronRepository {
    async fn insert_patron(&self, patron: &PatronEntity) -> Option<usize> {
        match self.try_insert(patron) {
            Ok(res) => res,
            Err(err) => {
                tracing::warn!("patron insert failed for {}: {}", patron.member_id(), err);
                None
            }
        }
    }

    async fn update_patron(&self, patron: &PatronEntity) -> Option<usize> {
        match self.try_update(patron) {
            Ok(updated) => Some(updated),
            Err(err) => {
                tracing::warn!("patron update failed for {}: {}", patron.member_id(), err);
                None
            }
        }
    }

    async fn retrieve_patron(&self, member_id: &str) -> Option<PatronEntity> {
        match self.load() {
            Ok(patrons) => patrons.iter()
                .filter(|doc| doc.member_id == member_id)
                .find_map(|doc| PatronEntity::try_from(doc).ok()),
            Err(err) => {
                tracing::warn!("patron lookup failed for {}: {}", member_id, err);
                None
            }
        }
    }

    async fn get_all_patrons(&self) -> Vec<PatronDto> {
        match self.load() {
            Ok(patrons) => patrons,
            Err(err) => {
                tracing::warn!("patron listing failed: {}", err);
                vec![]
            }
        }
    }

    async fn get_patron_count(&self) -> usize {
        self.get_all_patrons().await.len()
    }

    async fn close_db(&self) {
        // records are flushed per mutation; nothing is held open
    }
}

#[cfg(test)]
mod tests {
    use crate::patrons::domain::model::PatronEntity;
    use crate::patrons::dto::PatronDto;
    use crate::patrons::repository::file_patron_repository::{FilePatronRepository, PatronDocFile};
    use crate::patrons::repository::PatronRepository;
    use crate::utils::store::save_doc_file;

    fn repository(dir: &tempfile::TempDir) -> FilePatronRepository {
        let path = dir.path().join("patrons.json");
        FilePatronRepository::new(path.to_str().expect("should build path"))
    }

    #[tokio::test]
    async fn test_should_insert_and_retrieve_patron() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let repo = repository(&dir);
        let patron = PatronEntity::new("John", "Doe", 25, "P001").expect("should build patron");

        let doc_id = repo.insert_patron(&patron).await.expect("should insert patron");
        assert_eq!(1, doc_id);

        let loaded = repo.retrieve_patron("P001").await.expect("should return patron");
        assert_eq!(patron, loaded);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_member_id() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let repo = repository(&dir);
        let patron = PatronEntity::new("John", "Doe", 25, "P001").expect("should build patron");
        let copy = PatronEntity::new("Jane", "Smith", 30, "P001").expect("should build patron");

        assert_eq!(Some(1), repo.insert_patron(&patron).await);
        assert_eq!(None, repo.insert_patron(&copy).await);
        assert_eq!(1, repo.get_patron_count().await);
    }

    #[tokio::test]
    async fn test_should_update_patron() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let repo = repository(&dir);
        let mut patron = PatronEntity::new("John", "Doe", 25, "P001").expect("should build patron");
        repo.insert_patron(&patron).await.expect("should insert patron");

        patron.add_borrowed_book("Test Book");
        assert_eq!(Some(1), repo.update_patron(&patron).await);

        let loaded = repo.retrieve_patron("P001").await.expect("should return patron");
        assert_eq!(vec!["test book".to_string()], loaded.get_borrowed_books());
    }

    #[tokio::test]
    async fn test_should_update_absent_patron_as_noop() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let repo = repository(&dir);
        let patron = PatronEntity::new("John", "Doe", 25, "P001").expect("should build patron");

        assert_eq!(Some(0), repo.update_patron(&patron).await);
        assert_eq!(0, repo.get_patron_count().await);
    }

    #[tokio::test]
    async fn test_should_retrieve_first_match_for_duplicate_ids() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("patrons.json");
        // data written behind the store's back, carrying a duplicate id
        let docs = PatronDocFile {
            patrons: vec![
                PatronDto::new("John", "Doe", 25, "P001"),
                PatronDto::new("Jane", "Smith", 30, "P001"),
            ],
        };
        save_doc_file(path.as_path(), &docs).expect("should save");

        let repo = FilePatronRepository::new(path.to_str().expect("should build path"));
        let loaded = repo.retrieve_patron("P001").await.expect("should return patron");
        assert_eq!("John", loaded.fname());
        assert_eq!("Doe", loaded.lname());
        assert_eq!(25, loaded.age());
    }

    #[tokio::test]
    async fn test_should_skip_unreadable_docs_on_retrieve() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("patrons.json");
        let docs = PatronDocFile {
            patrons: vec![
                PatronDto::new("J0hn", "Doe", 25, "P001"),
                PatronDto::new("Jane", "Smith", 30, "P001"),
            ],
        };
        save_doc_file(path.as_path(), &docs).expect("should save");

        let repo = FilePatronRepository::new(path.to_str().expect("should build path"));
        // the first doc fails name validation, the next match wins
        let loaded = repo.retrieve_patron("P001").await.expect("should return patron");
        assert_eq!("Jane", loaded.fname());
    }

    #[tokio::test]
    async fn test_should_list_and_count_patrons() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let repo = repository(&dir);
        let first = PatronEntity::new("John", "Doe", 25, "P001").expect("should build patron");
        let second = PatronEntity::new("Jane", "Doe", 23, "P002").expect("should build patron");
        repo.insert_patron(&first).await.expect("should insert patron");
        repo.insert_patron(&second).await.expect("should insert patron");

        let all = repo.get_all_patrons().await;
        assert_eq!(2, all.len());
        assert_eq!(2, repo.get_patron_count().await);
        assert_eq!("P001", all[0].member_id.as_str());
        assert_eq!("P002", all[1].member_id.as_str());
    }

    #[tokio::test]
    async fn test_should_absorb_corrupt_store_file() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("patrons.json");
        std::fs::write(path.as_path(), "not json").expect("should write");

        let repo = FilePatronRepository::new(path.to_str().expect("should build path"));
        let patron = PatronEntity::new("John", "Doe", 25, "P001").expect("should build patron");
        assert_eq!(None, repo.insert_patron(&patron).await);
        assert_eq!(None, repo.retrieve_patron("P001").await);
        assert!(repo.get_all_patrons().await.is_empty());
    }

    #[tokio::test]
    async fn test_should_close_db_idempotently() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let repo = repository(&dir);
        repo.close_db().await;
        repo.close_db().await;
    }
}
