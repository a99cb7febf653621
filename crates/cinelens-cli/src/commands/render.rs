use crate::output::{Output, OutputFormat};
use cinelens_catalog::has_more_pages;
use cinelens_models::{Actor, Genre, Movie, UserReview};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};

pub fn print_movies(output: &Output, movies: &[Movie]) {
    match output.format() {
        OutputFormat::Human => {
            if movies.is_empty() {
                output.info("  (no results)");
                return;
            }
            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_header(vec!["ID", "Title", "Released", "Rating", "Lang"]);
            for movie in movies {
                table.add_row(vec![
                    movie.id.to_string(),
                    movie.title.clone(),
                    movie.release_date.clone(),
                    format!("{:.1}", movie.vote_average),
                    movie.original_language.clone(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::json!({ "results": movies }));
        }
    }
}

/// Hint that the caller can ask for the next page: a full provider page
/// means more pages probably exist.
pub fn print_page_hint(output: &Output, movies: &[Movie], page: u32) {
    if has_more_pages(movies) {
        output.info(format!("More results may be available: try --page {}", page + 1));
    }
}

pub fn print_genres(output: &Output, genres: &[Genre]) {
    match output.format() {
        OutputFormat::Human => {
            if genres.is_empty() {
                output.info("  (no genres)");
                return;
            }
            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_header(vec!["ID", "Name"]);
            for genre in genres {
                table.add_row(vec![genre.id.to_string(), genre.name.clone()]);
            }
            println!("{table}");
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::json!({ "genres": genres }));
        }
    }
}

pub fn print_actors(output: &Output, actors: &[Actor]) {
    match output.format() {
        OutputFormat::Human => {
            if actors.is_empty() {
                output.info("  (no results)");
                return;
            }
            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_header(vec!["ID", "Name", "Department", "Popularity"]);
            for actor in actors {
                table.add_row(vec![
                    actor.id.to_string(),
                    actor.name.clone(),
                    actor.known_for_department.clone(),
                    format!("{:.1}", actor.popularity),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::json!({ "results": actors }));
        }
    }
}

pub fn print_reviews(output: &Output, movie_id: u64, reviews: &[UserReview]) {
    match output.format() {
        OutputFormat::Human => {
            if reviews.is_empty() {
                output.info(format!("No reviews stored for movie {}", movie_id));
                return;
            }
            for review in reviews {
                println!(
                    "{} ({}/5) on {}",
                    review.user_name,
                    review.rating,
                    review.created_at.format("%Y-%m-%d %H:%M")
                );
                println!("  {}", review.review);
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::json!({ "movie_id": movie_id, "reviews": reviews }));
        }
    }
}
