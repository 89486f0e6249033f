pub(crate) mod file_patron_repository;
pub(crate) mod mem_patron_repository;

use async_trait::async_trait;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::dto::PatronDto;

// PatronRepository abstracts the document store that persists patron
// records keyed by member id. Every method absorbs storage failures
// into its no-data value; callers only ever see null/empty results.
#[async_trait]
pub(crate) trait PatronRepository: Sync + Send {
    // returns the assigned document id, or None when a patron with the
    // same member id already exists or the store rejects the write
    async fn insert_patron(&self, patron: &PatronEntity) -> Option<usize>;

    // overwrites stored records matching the patron's member id and
    // returns the number of records touched
    async fn update_patron(&self, patron: &PatronEntity) -> Option<usize>;

    // returns the first stored record matching the member id, in
    // storage order, reconstructed as a patron
    async fn retrieve_patron(&self, member_id: &str) -> Option<PatronEntity>;

    async fn get_all_patrons(&self) -> Vec<PatronDto>;

    async fn get_patron_count(&self) -> usize;

    // releases underlying storage resources; idempotent
    async fn close_db(&self);
}
