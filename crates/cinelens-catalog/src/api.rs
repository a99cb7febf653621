use anyhow::{anyhow, Result};
use cinelens_models::{Actor, Genre, Movie, MovieDetails, Video};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct PagedResults<T> {
    #[serde(default)]
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct GenreListResponse {
    #[serde(default)]
    genres: Vec<Genre>,
}

async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str, what: &str) -> Result<T> {
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(anyhow!("Failed to fetch {}: {} - {}", what, status, error_text));
    }

    let data: T = response.json().await?;
    Ok(data)
}

/// Fetch one page of a curated movie list (popular, top_rated, upcoming,
/// now_playing).
pub async fn movie_list(
    client: &Client,
    base_url: &str,
    api_key: &str,
    language: &str,
    list: &str,
    page: u32,
) -> Result<Vec<Movie>> {
    let url = format!(
        "{}/movie/{}?api_key={}&page={}&language={}",
        base_url, list, api_key, page, language
    );
    let data: PagedResults<Movie> = fetch_json(client, &url, list).await?;
    Ok(data.results)
}

/// Fetch the complete static genre reference list.
pub async fn genre_list(
    client: &Client,
    base_url: &str,
    api_key: &str,
    language: &str,
) -> Result<Vec<Genre>> {
    let url = format!(
        "{}/genre/movie/list?api_key={}&language={}",
        base_url, api_key, language
    );
    let data: GenreListResponse = fetch_json(client, &url, "genre list").await?;
    Ok(data.genres)
}

/// Filtered discovery. `filter` is the provider's query parameter name
/// (with_genres, with_original_language, with_cast); the value is passed
/// through as-is, with no local validation.
pub async fn discover_movies(
    client: &Client,
    base_url: &str,
    api_key: &str,
    language: &str,
    filter: &str,
    value: &str,
    page: u32,
) -> Result<Vec<Movie>> {
    let url = format!(
        "{}/discover/movie?api_key={}&{}={}&page={}&language={}",
        base_url,
        api_key,
        filter,
        urlencoding::encode(value),
        page,
        language
    );
    let data: PagedResults<Movie> = fetch_json(client, &url, "discovery results").await?;
    Ok(data.results)
}

/// Fetch one title with credits and similar titles embedded via the
/// provider's response-shaping parameter.
pub async fn movie_details(
    client: &Client,
    base_url: &str,
    api_key: &str,
    language: &str,
    movie_id: u64,
) -> Result<MovieDetails> {
    let url = format!(
        "{}/movie/{}?api_key={}&append_to_response=credits,similar&language={}",
        base_url, movie_id, api_key, language
    );
    fetch_json(client, &url, "movie details").await
}

pub async fn search_movies(
    client: &Client,
    base_url: &str,
    api_key: &str,
    language: &str,
    query: &str,
    page: u32,
) -> Result<Vec<Movie>> {
    let url = format!(
        "{}/search/movie?api_key={}&query={}&page={}&language={}",
        base_url,
        api_key,
        urlencoding::encode(query),
        page,
        language
    );
    let data: PagedResults<Movie> = fetch_json(client, &url, "movie search results").await?;
    Ok(data.results)
}

pub async fn search_people(
    client: &Client,
    base_url: &str,
    api_key: &str,
    language: &str,
    query: &str,
    page: u32,
) -> Result<Vec<Actor>> {
    let url = format!(
        "{}/search/person?api_key={}&query={}&page={}&language={}",
        base_url,
        api_key,
        urlencoding::encode(query),
        page,
        language
    );
    let data: PagedResults<Actor> = fetch_json(client, &url, "people search results").await?;
    Ok(data.results)
}

pub async fn movie_videos(
    client: &Client,
    base_url: &str,
    api_key: &str,
    language: &str,
    movie_id: u64,
) -> Result<Vec<Video>> {
    let url = format!(
        "{}/movie/{}/videos?api_key={}&language={}",
        base_url, movie_id, api_key, language
    );
    let data: PagedResults<Video> = fetch_json(client, &url, "movie videos").await?;
    Ok(data.results)
}

/// Pick the first YouTube-hosted trailer in provider response order.
pub fn first_trailer_key(videos: &[Video]) -> Option<&str> {
    videos
        .iter()
        .find(|v| v.kind == "Trailer" && v.site == "YouTube")
        .map(|v| v.key.as_str())
}
