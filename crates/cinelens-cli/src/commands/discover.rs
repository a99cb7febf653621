use super::{catalog_client, render};
use crate::output::Output;
use anyhow::Result;

pub async fn run_discover(
    genre: Option<u64>,
    language: Option<String>,
    actor: Option<u64>,
    page: u32,
    output: &Output,
) -> Result<()> {
    let client = catalog_client(output)?;

    // clap enforces exactly one filter
    let movies = if let Some(genre_id) = genre {
        client.discover_by_genre(genre_id, page).await
    } else if let Some(code) = language {
        client.discover_by_language(&code, page).await
    } else if let Some(actor_id) = actor {
        client.discover_by_cast(actor_id, page).await
    } else {
        unreachable!("argument group requires one filter")
    };

    render::print_movies(output, &movies);
    render::print_page_hint(output, &movies, page);
    Ok(())
}
