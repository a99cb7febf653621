use super::{catalog_client, render};
use crate::output::Output;
use anyhow::Result;

pub async fn run_genres(output: &Output) -> Result<()> {
    let client = catalog_client(output)?;
    let genres = client.genres().await;
    render::print_genres(output, &genres);
    Ok(())
}
