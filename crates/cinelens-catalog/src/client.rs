use crate::api;
use crate::notify::{LogNotifier, Notifier};
use anyhow::Result;
use cinelens_models::{Actor, Genre, Movie, MovieDetails};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// List endpoints return at most one provider-defined page of results.
pub const PROVIDER_PAGE_SIZE: usize = 20;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// "More pages may exist" inference: a full page means there is probably
/// another one; anything shorter is the last.
pub fn has_more_pages<T>(page: &[T]) -> bool {
    page.len() >= PROVIDER_PAGE_SIZE
}

/// Read-only client for the external movie metadata provider.
///
/// Every operation performs at most one outbound call, never retries and
/// never caches. Transport errors, non-success statuses and malformed
/// bodies are all folded into the same outcome: an empty/absent result
/// plus one notice through the [`Notifier`]. Callers must not branch on
/// the difference between "not found" and "provider unreachable" - the
/// client does not expose one.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    api_key: String,
    language: String,
    notifier: Arc<dyn Notifier>,
}

impl CatalogClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            language: "en-US".to_string(),
            notifier: Arc::new(LogNotifier),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub async fn popular(&self, page: u32) -> Vec<Movie> {
        self.list("popular", page, "Failed to load popular movies").await
    }

    pub async fn top_rated(&self, page: u32) -> Vec<Movie> {
        self.list("top_rated", page, "Failed to load top rated movies").await
    }

    pub async fn upcoming(&self, page: u32) -> Vec<Movie> {
        self.list("upcoming", page, "Failed to load upcoming movies").await
    }

    pub async fn now_playing(&self, page: u32) -> Vec<Movie> {
        self.list("now_playing", page, "Failed to load now playing movies").await
    }

    async fn list(&self, list: &str, page: u32, notice: &str) -> Vec<Movie> {
        let result = api::movie_list(
            &self.client,
            &self.base_url,
            &self.api_key,
            &self.language,
            list,
            normalize_page(page),
        )
        .await;
        self.absorb(result, notice)
    }

    /// The complete static genre list, unpaginated. Fetched per call; the
    /// caller decides whether to hold on to it for the session.
    pub async fn genres(&self) -> Vec<Genre> {
        let result = api::genre_list(&self.client, &self.base_url, &self.api_key, &self.language).await;
        self.absorb(result, "Failed to load genres")
    }

    pub async fn discover_by_genre(&self, genre_id: u64, page: u32) -> Vec<Movie> {
        self.discover("with_genres", &genre_id.to_string(), page, "Failed to load movies for this genre")
            .await
    }

    pub async fn discover_by_language(&self, language_code: &str, page: u32) -> Vec<Movie> {
        let notice = format!("Failed to load {} movies", language_code);
        self.discover("with_original_language", language_code, page, &notice).await
    }

    pub async fn discover_by_cast(&self, actor_id: u64, page: u32) -> Vec<Movie> {
        self.discover("with_cast", &actor_id.to_string(), page, "Failed to load movies for this actor")
            .await
    }

    async fn discover(&self, filter: &str, value: &str, page: u32, notice: &str) -> Vec<Movie> {
        let result = api::discover_movies(
            &self.client,
            &self.base_url,
            &self.api_key,
            &self.language,
            filter,
            value,
            normalize_page(page),
        )
        .await;
        self.absorb(result, notice)
    }

    /// Single-title detail fetch with credits and similar titles embedded.
    /// Absent on any failure, including an id that does not resolve.
    pub async fn details(&self, movie_id: u64) -> Option<MovieDetails> {
        let result = api::movie_details(
            &self.client,
            &self.base_url,
            &self.api_key,
            &self.language,
            movie_id,
        )
        .await;
        self.absorb_opt(result, "Failed to load movie details")
    }

    /// A blank or whitespace-only query short-circuits to an empty result
    /// without touching the network: the provider rejects empty queries, so
    /// the round trip would be wasted.
    pub async fn search_movies(&self, query: &str, page: u32) -> Vec<Movie> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let result = api::search_movies(
            &self.client,
            &self.base_url,
            &self.api_key,
            &self.language,
            query,
            normalize_page(page),
        )
        .await;
        self.absorb(result, "Failed to search movies")
    }

    pub async fn search_actors(&self, query: &str, page: u32) -> Vec<Actor> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let result = api::search_people(
            &self.client,
            &self.base_url,
            &self.api_key,
            &self.language,
            query,
            normalize_page(page),
        )
        .await;
        self.absorb(result, "Failed to search actors")
    }

    /// Key of the first YouTube trailer in the provider's video list, in
    /// response order. Absent without a notice when nothing matches; absent
    /// with a notice when the lookup itself fails.
    pub async fn trailer_key(&self, movie_id: u64) -> Option<String> {
        let result = api::movie_videos(
            &self.client,
            &self.base_url,
            &self.api_key,
            &self.language,
            movie_id,
        )
        .await;
        match result {
            Ok(videos) => api::first_trailer_key(&videos).map(str::to_string),
            Err(err) => {
                warn!("Error fetching movie videos: {:#}", err);
                self.notifier.notify("Failed to load movie trailer");
                None
            }
        }
    }

    fn absorb<T>(&self, result: Result<Vec<T>>, notice: &str) -> Vec<T> {
        match result {
            Ok(items) => items,
            Err(err) => {
                warn!("{}: {:#}", notice, err);
                self.notifier.notify(notice);
                Vec::new()
            }
        }
    }

    fn absorb_opt<T>(&self, result: Result<T>, notice: &str) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("{}: {:#}", notice, err);
                self.notifier.notify(notice);
                None
            }
        }
    }
}

fn normalize_page(page: u32) -> u32 {
    page.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        notices: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        fn count(&self) -> usize {
            self.notices.lock().unwrap().len()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.notices.lock().unwrap().push(message.to_string());
        }
    }

    /// Client pointed at a port nothing listens on. Any request that
    /// actually reaches the network fails fast with a connection error,
    /// which in turn records a notice - so "zero notices" doubles as
    /// "zero network calls".
    fn unreachable_client() -> (CatalogClient, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let client = CatalogClient::with_base_url("test-key", "http://127.0.0.1:9/3")
            .with_notifier(notifier.clone());
        (client, notifier)
    }

    #[tokio::test]
    async fn test_blank_movie_search_short_circuits() {
        let (client, notifier) = unreachable_client();

        assert!(client.search_movies("", 1).await.is_empty());
        assert!(client.search_movies("   ", 1).await.is_empty());
        assert!(client.search_movies("\t\n", 3).await.is_empty());
        assert_eq!(notifier.count(), 0);
    }

    #[tokio::test]
    async fn test_blank_actor_search_short_circuits() {
        let (client, notifier) = unreachable_client();

        assert!(client.search_actors("  ", 1).await.is_empty());
        assert_eq!(notifier.count(), 0);
    }

    #[tokio::test]
    async fn test_discover_by_genre_failure_notifies_once() {
        let (client, notifier) = unreachable_client();

        let movies = client.discover_by_genre(0, 1).await;
        assert!(movies.is_empty());
        assert_eq!(notifier.count(), 1);
    }

    #[tokio::test]
    async fn test_details_failure_returns_absent_and_notifies() {
        let (client, notifier) = unreachable_client();

        assert!(client.details(603692).await.is_none());
        assert_eq!(notifier.count(), 1);
    }

    #[tokio::test]
    async fn test_trailer_failure_returns_absent_and_notifies() {
        let (client, notifier) = unreachable_client();

        assert!(client.trailer_key(603692).await.is_none());
        assert_eq!(notifier.count(), 1);
    }

    #[tokio::test]
    async fn test_list_failure_returns_empty_per_call() {
        let (client, notifier) = unreachable_client();

        assert!(client.popular(1).await.is_empty());
        assert!(client.genres().await.is_empty());
        assert_eq!(notifier.count(), 2);
    }

    fn dummy_movie(id: u64) -> Movie {
        Movie {
            id,
            title: format!("Movie {}", id),
            poster_path: None,
            backdrop_path: None,
            release_date: String::new(),
            overview: String::new(),
            vote_average: 0.0,
            genre_ids: Vec::new(),
            original_language: "en".to_string(),
        }
    }

    #[test]
    fn test_has_more_pages_inference() {
        let full: Vec<Movie> = (0..20).map(dummy_movie).collect();
        let short: Vec<Movie> = (0..19).map(dummy_movie).collect();

        assert!(has_more_pages(&full));
        assert!(!has_more_pages(&short));
        assert!(!has_more_pages::<Movie>(&[]));
    }

    #[test]
    fn test_page_normalization() {
        assert_eq!(normalize_page(0), 1);
        assert_eq!(normalize_page(1), 1);
        assert_eq!(normalize_page(7), 7);
    }
}
