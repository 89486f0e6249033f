use crate::catalog::domain::service::OpenLibraryClient;
use crate::catalog::domain::CatalogClient;
use crate::core::domain::Configuration;

pub(crate) async fn create_catalog_client(config: &Configuration) -> Box<dyn CatalogClient> {
    Box::new(OpenLibraryClient::new(config))
}
