use super::{catalog_client, render};
use crate::output::{Output, OutputFormat};
use anyhow::Result;
use cinelens_models::MovieDetails;

const CAST_DISPLAY_LIMIT: usize = 10;
const SIMILAR_DISPLAY_LIMIT: usize = 8;

pub async fn run_details(movie_id: u64, output: &Output) -> Result<()> {
    let client = catalog_client(output)?;

    let Some(details) = client.details(movie_id).await else {
        // Explicit failed-to-load state, never a silently stale view.
        output.error(format!("Failed to load details for movie {}", movie_id));
        return Ok(());
    };

    match output.format() {
        OutputFormat::Human => print_human(output, &details),
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::to_value(&details)?);
        }
    }
    Ok(())
}

fn print_human(output: &Output, details: &MovieDetails) {
    output.heading(format!("{} ({})", details.title, release_year(details)));
    if !details.tagline.is_empty() {
        output.info(format!("\"{}\"", details.tagline));
    }
    if !details.overview.is_empty() {
        output.info(&details.overview);
    }

    let genres: Vec<&str> = details.genres.iter().map(|g| g.name.as_str()).collect();
    output.info(format!(
        "Genres: {}  |  Runtime: {} min  |  Status: {}  |  Rating: {:.1}/10",
        genres.join(", "),
        details.runtime,
        details.status,
        details.vote_average
    ));
    if details.budget > 0 || details.revenue > 0 {
        output.info(format!(
            "Budget: ${}  |  Revenue: ${}",
            details.budget, details.revenue
        ));
    }

    if !details.credits.cast.is_empty() {
        output.heading("Top billed cast");
        for member in details.credits.cast.iter().take(CAST_DISPLAY_LIMIT) {
            output.info(format!("  {} as {}", member.name, member.character));
        }
    }

    if !details.similar.results.is_empty() {
        output.heading("Similar titles");
        render::print_movies(
            output,
            &details.similar.results[..details.similar.results.len().min(SIMILAR_DISPLAY_LIMIT)],
        );
    }
}

fn release_year(details: &MovieDetails) -> &str {
    if details.release_date.len() >= 4 {
        &details.release_date[..4]
    } else {
        "----"
    }
}
