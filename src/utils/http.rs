// Joins whitespace-separated words of a search term with '+' the way
// the bibliographic search endpoint expects its query parameters.
pub fn encode_search_term(term: &str) -> String {
    term.split_whitespace().collect::<Vec<&str>>().join("+")
}

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .json()
        .init();
}
