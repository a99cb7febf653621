use super::{catalog_client, render};
use crate::output::Output;
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListCategory {
    Popular,
    #[value(name = "top-rated")]
    TopRated,
    Upcoming,
    #[value(name = "now-playing")]
    NowPlaying,
}

/// The four rails in one screen. Fetches run concurrently and complete in
/// no particular order; each section renders from its own result, so one
/// failed rail leaves the others intact.
pub async fn run_home(output: &Output) -> Result<()> {
    let client = catalog_client(output)?;

    let (popular, top_rated, upcoming, now_playing) = futures::join!(
        client.popular(1),
        client.top_rated(1),
        client.upcoming(1),
        client.now_playing(1),
    );

    output.heading("Popular");
    render::print_movies(output, &popular);
    output.heading("Top rated");
    render::print_movies(output, &top_rated);
    output.heading("Upcoming");
    render::print_movies(output, &upcoming);
    output.heading("Now playing");
    render::print_movies(output, &now_playing);

    Ok(())
}

pub async fn run_list(category: ListCategory, page: u32, output: &Output) -> Result<()> {
    let client = catalog_client(output)?;

    let movies = match category {
        ListCategory::Popular => client.popular(page).await,
        ListCategory::TopRated => client.top_rated(page).await,
        ListCategory::Upcoming => client.upcoming(page).await,
        ListCategory::NowPlaying => client.now_playing(page).await,
    };

    render::print_movies(output, &movies);
    render::print_page_hint(output, &movies, page);
    Ok(())
}
