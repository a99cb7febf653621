use super::{profile_store, render, review_store};
use crate::output::Output;
use anyhow::{anyhow, Result};
use cinelens_models::ReviewDraft;

pub fn run_add(
    movie_id: u64,
    rating: u8,
    text: String,
    photo: Option<String>,
    output: &Output,
) -> Result<()> {
    // Input validation is this layer's job; the store accepts any rating.
    if !(1..=5).contains(&rating) {
        return Err(anyhow!("Rating must be between 1 and 5, got {}", rating));
    }
    if text.trim().is_empty() {
        return Err(anyhow!("Review text must not be empty"));
    }

    let user = profile_store()?
        .current_user()?
        .ok_or_else(|| anyhow!("Not signed in. Run `cinelens profile login` first"))?;

    let store = review_store()?;
    let review = store.add_review(
        movie_id,
        ReviewDraft {
            user_id: user.id,
            user_name: user.name,
            user_photo_url: user.photo_url,
            rating,
            review: text,
            photo_url: photo,
        },
    )?;

    output.success(format!("Review {} saved for movie {}", review.id, movie_id));
    Ok(())
}

pub fn run_list(movie_id: u64, output: &Output) -> Result<()> {
    let store = review_store()?;
    let reviews = store.reviews(movie_id)?;
    render::print_reviews(output, movie_id, &reviews);
    Ok(())
}
