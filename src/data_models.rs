use serde::{Deserialize, Serialize};

/// One normalized search hit, as returned to relay clients.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub link: String,
    pub title: String,
    pub snippet: String,
}

impl SearchResult {
    pub fn new(link: String, title: String, snippet: String) -> SearchResult {
        SearchResult {
            link,
            title,
            snippet,
        }
    }
}
