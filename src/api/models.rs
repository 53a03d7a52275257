use serde::Deserialize;

pub const DEFAULT_RESULT_COUNT: i64 = 5;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: Option<String>,
    #[serde(default = "default_count")]
    pub count: i64,
}

fn default_count() -> i64 {
    DEFAULT_RESULT_COUNT
}

impl SearchRequest {
    /// The query, if present and non-empty.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }

    /// Result cap; a negative count asks for nothing.
    pub fn max_results(&self) -> usize {
        usize::try_from(self.count).unwrap_or(0)
    }
}
