use super::catalog_client;
use crate::output::Output;
use anyhow::Result;

pub async fn run_trailer(movie_id: u64, output: &Output) -> Result<()> {
    let client = catalog_client(output)?;

    match client.trailer_key(movie_id).await {
        Some(key) => {
            output.info(format!("https://www.youtube.com/watch?v={}", key));
        }
        None => {
            output.warn(format!("No trailer available for movie {}", movie_id));
        }
    }
    Ok(())
}
