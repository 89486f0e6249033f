use async_trait::async_trait;
use crate::catalog::domain::CatalogClient;
use crate::catalog::dto::{BookInfo, EbookRecord, SearchResponse};
use crate::core::domain::Configuration;
use crate::utils::http::encode_search_term;

// OpenLibraryClient performs one blocking GET per lookup against the
// bibliographic search endpoint and parses the JSON body.
#[derive(Debug)]
pub(crate) struct OpenLibraryClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenLibraryClient {
    pub(crate) fn new(config: &Configuration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.catalog_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn search_url(&self, param: &str, term: &str) -> String {
        format!("{}/search.json?{}={}", self.base_url, param, encode_search_term(term))
    }

    // Returns the parsed body on HTTP 200, None on any other status or
    // transport failure. Failures are logged, never raised.
    pub(crate) async fn make_request(&self, url: &str) -> Option<SearchResponse> {
        match self.client.get(url).send().await {
            Ok(resp) if resp.status() == reqwest::StatusCode::OK => {
                match resp.json::<SearchResponse>().await {
                    Ok(body) => Some(body),
                    Err(err) => {
                        tracing::warn!("catalog response for {} failed to parse: {}", url, err);
                        None
                    }
                }
            }
            Ok(resp) => {
                tracing::warn!("catalog lookup for {} answered {}", url, resp.status());
                None
            }
            Err(err) => {
                tracing::warn!("catalog lookup for {} failed: {}", url, err);
                None
            }
        }
    }
}

fn author_titles(resp: SearchResponse) -> Vec<String> {
    resp.docs.into_iter().filter_map(|doc| doc.title_suggest).collect()
}

fn book_infos(resp: SearchResponse) -> Vec<BookInfo> {
    resp.docs.into_iter().map(|doc| BookInfo {
        title: doc.title.unwrap_or_default(),
        publisher: doc.publisher,
        publish_year: doc.publish_year,
        language: doc.language,
    }).collect()
}

fn ebook_records(resp: SearchResponse) -> Vec<EbookRecord> {
    resp.docs.into_iter()
        .filter(|doc| doc.ebook_count_i > 0)
        .map(|doc| EbookRecord {
            title: doc.title.unwrap_or_default(),
            ebook_count: doc.ebook_count_i,
        })
        .collect()
}

#[async_trait]
impl CatalogClient for OpenLibraryClient {
    async fn is_book_available(&self, title: &str) -> bool {
        match self.make_request(self.search_url("q", title).as_str()).await {
            Some(resp) => !resp.docs.is_empty(),
            None => false,
        }
    }

    async fn books_by_author(&self, author: &str) -> Vec<String> {
        match self.make_request(self.search_url("author", author).as_str()).await {
            Some(resp) => author_titles(resp),
            None => vec![],
        }
    }

    async fn get_book_info(&self, title: &str) -> Vec<BookInfo> {
        match self.make_request(self.search_url("q", title).as_str()).await {
            Some(resp) => book_infos(resp),
            None => vec![],
        }
    }

    async fn get_ebooks(&self, title: &str) -> Vec<EbookRecord> {
        match self.make_request(self.search_url("q", title).as_str()).await {
            Some(resp) => ebook_records(resp),
            None => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::domain::service::{author_titles, book_infos, ebook_records, OpenLibraryClient};
    use crate::catalog::domain::CatalogClient;
    use crate::catalog::dto::SearchResponse;
    use crate::core::domain::Configuration;

    // nothing listens on the discard port, so every lookup fails fast
    fn unreachable_client() -> OpenLibraryClient {
        OpenLibraryClient::new(
            &Configuration::new("test_db.json").with_catalog_base_url("http://127.0.0.1:9"))
    }

    fn response(json: &str) -> SearchResponse {
        serde_json::from_str(json).expect("should deserialize")
    }

    #[tokio::test]
    async fn test_should_build_search_url() {
        let client = unreachable_client();
        assert_eq!("http://127.0.0.1:9/search.json?q=test+book",
                   client.search_url("q", "test book"));
        assert_eq!("http://127.0.0.1:9/search.json?author=some+author",
                   client.search_url("author", "some author"));
    }

    #[tokio::test]
    async fn test_should_extract_author_titles() {
        let resp = response(r#"{"docs": [
            {"title_suggest": "Book 1"},
            {"title_suggest": "Book 2"},
            {"title": "No Suggest"}
        ]}"#);
        assert_eq!(vec!["Book 1".to_string(), "Book 2".to_string()], author_titles(resp));
    }

    #[tokio::test]
    async fn test_should_extract_book_infos() {
        let resp = response(r#"{"docs": [
            {"title": "Book 1", "publisher": ["pub"], "publish_year": [2000], "language": ["en"]},
            {"title": "Book 2"}
        ]}"#);
        let infos = book_infos(resp);
        assert_eq!(2, infos.len());
        assert_eq!("Book 1", infos[0].title.as_str());
        assert_eq!(Some(vec!["en".to_string()]), infos[0].language);
        assert_eq!(None, infos[1].language);
    }

    #[tokio::test]
    async fn test_should_filter_ebook_records() {
        let resp = response(r#"{"docs": [
            {"title": "Book 1", "ebook_count_i": 2},
            {"title": "Book 2", "ebook_count_i": 0}
        ]}"#);
        let ebooks = ebook_records(resp);
        assert_eq!(1, ebooks.len());
        assert_eq!("Book 1", ebooks[0].title.as_str());
        assert_eq!(2, ebooks[0].ebook_count);
    }

    #[tokio::test]
    async fn test_should_absorb_transport_failure() {
        let client = unreachable_client();
        assert!(client.make_request("http://127.0.0.1:9/search.json?q=test").await.is_none());
        assert!(!client.is_book_available("Some Book").await);
        assert!(client.books_by_author("Some Author").await.is_empty());
        assert!(client.get_book_info("Some Book").await.is_empty());
        assert!(client.get_ebooks("Some Book").await.is_empty());
    }
}
