use std::collections::HashSet;
use async_trait::async_trait;
use crate::catalog::domain::CatalogClient;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::library::domain::LibraryService;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::repository::PatronRepository;

pub(crate) struct LibraryServiceImpl {
    catalog: Box<dyn CatalogClient>,
    patron_repository: Box<dyn PatronRepository>,
}

impl LibraryServiceImpl {
    pub(crate) fn new(_config: &Configuration, catalog: Box<dyn CatalogClient>,
                      patron_repository: Box<dyn PatronRepository>) -> Self {
        Self {
            catalog,
            patron_repository,
        }
    }
}

#[async_trait]
impl LibraryService for LibraryServiceImpl {
    async fn is_ebook(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.catalog.get_ebooks(title.as_str()).await.iter()
            .any(|record| record.title.to_lowercase() == title)
    }

    async fn get_ebooks_count(&self, title: &str) -> i64 {
        self.catalog.get_ebooks(title).await.iter()
            .map(|record| record.ebook_count)
            .sum()
    }

    async fn is_book_by_author(&self, author: &str, title: &str) -> bool {
        let title = title.to_lowercase();
        self.catalog.books_by_author(author).await.iter()
            .any(|candidate| candidate.to_lowercase() == title)
    }

    async fn get_languages_for_book(&self, title: &str) -> HashSet<String> {
        let mut languages = HashSet::new();
        for info in self.catalog.get_book_info(title).await {
            if let Some(codes) = info.language {
                languages.extend(codes);
            }
        }
        languages
    }

    async fn register_patron(&self, fname: &str, lname: &str, age: i64, member_id: &str) -> LibraryResult<Option<usize>> {
        let patron = PatronEntity::new(fname, lname, age, member_id)?;
        Ok(self.patron_repository.insert_patron(&patron).await)
    }

    async fn is_patron_registered(&self, patron: &PatronEntity) -> bool {
        self.patron_repository.retrieve_patron(patron.member_id()).await.is_some()
    }

    async fn borrow_book(&self, title: &str, patron: &mut PatronEntity) {
        patron.add_borrowed_book(title.to_lowercase().as_str());
    }

    async fn return_borrowed_book(&self, title: &str, patron: &mut PatronEntity) {
        patron.return_borrowed_book(title.to_lowercase().as_str());
    }

    async fn is_book_borrowed(&self, title: &str, patron: &PatronEntity) -> bool {
        let title = title.to_lowercase();
        patron.get_borrowed_books().iter().any(|b| *b == title)
    }

    async fn find_patron(&self, member_id: &str) -> Option<PatronEntity> {
        self.patron_repository.retrieve_patron(member_id).await
    }

    async fn save_patron(&self, patron: &PatronEntity) -> Option<usize> {
        self.patron_repository.update_patron(patron).await
    }
}
