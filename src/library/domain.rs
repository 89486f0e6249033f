pub mod service;

use std::collections::HashSet;
use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::patrons::domain::model::PatronEntity;

// LibraryService composes the bibliographic catalog and the patron
// store. Every method is a pure function of its collaborators' current
// responses plus its arguments; collaborators absorb their own
// failures, so the only error that ever surfaces here is an invalid
// patron name at registration.
#[async_trait]
pub(crate) trait LibraryService: Sync + Send {
    // true when an ebook record's own title matches case-insensitively
    async fn is_ebook(&self, title: &str) -> bool;

    // sum of electronic-copy counts over all records for the query
    async fn get_ebooks_count(&self, title: &str) -> i64;

    // true when the title case-insensitively matches one of the
    // author's titles
    async fn is_book_by_author(&self, author: &str, title: &str) -> bool;

    // deduplicated union of language codes across matching records
    async fn get_languages_for_book(&self, title: &str) -> HashSet<String>;

    // constructs the patron first, so an invalid name never reaches the
    // store; Ok(None) means the store rejected the insert
    async fn register_patron(&self, fname: &str, lname: &str, age: i64, member_id: &str) -> LibraryResult<Option<usize>>;

    // existence by member id, not full equality
    async fn is_patron_registered(&self, patron: &PatronEntity) -> bool;

    async fn borrow_book(&self, title: &str, patron: &mut PatronEntity);

    async fn return_borrowed_book(&self, title: &str, patron: &mut PatronEntity);

    async fn is_book_borrowed(&self, title: &str, patron: &PatronEntity) -> bool;

    async fn find_patron(&self, member_id: &str) -> Option<PatronEntity>;

    // the explicit store write that makes a borrow or return durable;
    // borrow_book/return_borrowed_book never persist on their own
    async fn save_patron(&self, patron: &PatronEntity) -> Option<usize>;
}
