use crate::catalog::factory::create_catalog_client;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::library::domain::service::LibraryServiceImpl;
use crate::library::domain::LibraryService;
use crate::patrons::factory::create_patron_repository;

pub(crate) async fn create_library_service(config: &Configuration, store: RepositoryStore) -> Box<dyn LibraryService> {
    let catalog = create_catalog_client(config).await;
    let patron_repository = create_patron_repository(config, store).await;
    Box::new(LibraryServiceImpl::new(config, catalog, patron_repository))
}
