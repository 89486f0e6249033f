use lazy_static::lazy_static;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::patrons::repository::file_patron_repository::FilePatronRepository;
use crate::patrons::repository::mem_patron_repository::MemPatronRepository;
use crate::patrons::repository::PatronRepository;

lazy_static! {
    // every Memory-backed service talks to the same store, matching how
    // file-backed services share one document file
    static ref SHARED_MEM_REPOSITORY: MemPatronRepository = MemPatronRepository::new();
}

pub(crate) async fn create_patron_repository(config: &Configuration, store: RepositoryStore) -> Box<dyn PatronRepository> {
    match store {
        RepositoryStore::JsonFile => {
            Box::new(FilePatronRepository::new(config.db_path.as_str()))
        }
        RepositoryStore::Memory => {
            Box::new(SHARED_MEM_REPOSITORY.clone())
        }
    }
}
