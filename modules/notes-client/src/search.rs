//! Semantic and keyword search against `/api/search/`.

use notes_client_types::{DEFAULT_SEARCH_LIMIT, SearchKind, SearchRequest, SearchResponse};
use reqwest::Method;

use crate::client::NotesClient;
use crate::error::Result;

pub struct SearchApi<'a> {
    client: &'a NotesClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) fn new(client: &'a NotesClient) -> Self {
        Self { client }
    }

    pub async fn search(&self, kind: SearchKind, query: &str, limit: u32) -> Result<SearchResponse> {
        let body = SearchRequest {
            query: query.to_string(),
            limit,
        };
        let request = self.client.request_json(
            Method::POST,
            &format!("/api/search/{}", kind.as_str()),
            &body,
        );
        self.client
            .fetch_json(request, format!("search for \"{}\"", query))
            .await
    }

    pub async fn semantic(&self, query: &str, limit: u32) -> Result<SearchResponse> {
        self.search(SearchKind::Semantic, query, limit).await
    }

    pub async fn keyword(&self, query: &str, limit: u32) -> Result<SearchResponse> {
        self.search(SearchKind::Keyword, query, limit).await
    }

    /// Semantic search with [`DEFAULT_SEARCH_LIMIT`]
    pub async fn semantic_default(&self, query: &str) -> Result<SearchResponse> {
        self.semantic(query, DEFAULT_SEARCH_LIMIT).await
    }

    /// Keyword search with [`DEFAULT_SEARCH_LIMIT`]
    pub async fn keyword_default(&self, query: &str) -> Result<SearchResponse> {
        self.keyword(query, DEFAULT_SEARCH_LIMIT).await
    }
}
