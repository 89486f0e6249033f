use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::dto::PatronDto;
use crate::patrons::repository::PatronRepository;

// MemPatronRepository keeps patron documents in a shared in-memory
// list with the same semantics as the file store. Clones share the
// underlying list, which lets the factory hand out one store to every
// service instance the way a local database would behave.
#[derive(Debug, Clone)]
pub(crate) struct MemPatronRepository {
    docs: Arc<Mutex<Vec<PatronDto>>>,
}

impl MemPatronRepository {
    pub(crate) fn new() -> Self {
        Self {
            docs: Arc::new(Mutex::new(vec![])),
        }
    }

    fn with_docs<T>(&self, f: impl FnOnce(&mut Vec<PatronDto>) -> T) -> Option<T> {
        match self.docs.lock() {
            Ok(mut docs) => Some(f(&mut docs)),
            Err(err) => {
                tracing::warn!("patron store lock poisoned: {}", err);
                None
            }
        }
    }
}

#[async_trait]
impl PatronRepository for MemPatronRepository {
    async fn insert_patron(&self, patron: &PatronEntity) -> Option<usize> {
        self.with_docs(|docs| {
            if docs.iter().any(|doc| doc.member_id == patron.member_id()) {
                return None;
            }
            docs.push(PatronDto::from(patron));
            Some(docs.len())
        }).flatten()
    }

    async fn update_patron(&self, patron: &PatronEntity) -> Option<usize> {
        self.with_docs(|docs| {
            let mut updated = 0;
            for doc in docs.iter_mut() {
                if doc.member_id == patron.member_id() {
                    *doc = PatronDto::from(patron);
                    updated += 1;
                }
            }
            updated
        })
    }

    async fn retrieve_patron(&self, member_id: &str) -> Option<PatronEntity> {
        self.with_docs(|docs| {
            docs.iter()
                .filter(|doc| doc.member_id == member_id)
                .find_map(|doc| PatronEntity::try_from(doc).ok())
        }).flatten()
    }

    async fn get_all_patrons(&self) -> Vec<PatronDto> {
        self.with_docs(|docs| docs.clone()).unwrap_or_default()
    }

    async fn get_patron_count(&self) -> usize {
        self.with_docs(|docs| docs.len()).unwrap_or(0)
    }

    async fn close_db(&self) {
        // nothing to release
    }
}
