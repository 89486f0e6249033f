pub mod service;

use async_trait::async_trait;
use crate::catalog::dto::{BookInfo, EbookRecord};

// CatalogClient abstracts the external bibliographic search service.
// Lookup failure of any kind is absorbed here: every method yields its
// empty value when the service is unreachable or answers with an
// error, and never raises to the caller.
#[async_trait]
pub(crate) trait CatalogClient: Sync + Send {
    // true when the title query matches at least one record
    async fn is_book_available(&self, title: &str) -> bool;

    // the title of every record attributed to the author
    async fn books_by_author(&self, author: &str) -> Vec<String>;

    // records matching the title query, renormalized to BookInfo
    async fn get_book_info(&self, title: &str) -> Vec<BookInfo>;

    // records matching the title query that carry a positive
    // electronic-copy count
    async fn get_ebooks(&self, title: &str) -> Vec<EbookRecord>;
}
