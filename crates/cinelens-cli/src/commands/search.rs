use super::{catalog_client, render};
use crate::output::Output;
use anyhow::Result;

pub async fn run_search_movies(query: &str, page: u32, output: &Output) -> Result<()> {
    if query.trim().is_empty() {
        output.warn("Empty search query");
        return Ok(());
    }
    let client = catalog_client(output)?;
    let movies = client.search_movies(query, page).await;
    render::print_movies(output, &movies);
    render::print_page_hint(output, &movies, page);
    Ok(())
}

pub async fn run_search_people(query: &str, page: u32, output: &Output) -> Result<()> {
    if query.trim().is_empty() {
        output.warn("Empty search query");
        return Ok(());
    }
    let client = catalog_client(output)?;
    let actors = client.search_actors(query, page).await;
    render::print_actors(output, &actors);
    Ok(())
}
