//! Image URL construction.
//!
//! The provider returns image fields as path fragments (leading slash
//! included) that must be joined onto a size-specific base URL. Each image
//! family has its own size variants.

pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    Small,
    Medium,
    Large,
    Original,
}

/// Poster image URL for a provider path fragment.
pub fn poster_url(path: &str, size: ImageSize) -> String {
    let variant = match size {
        ImageSize::Small => "w342",
        ImageSize::Medium => "w500",
        ImageSize::Large => "w780",
        ImageSize::Original => "original",
    };
    format!("{}/{}{}", IMAGE_BASE_URL, variant, path)
}

/// Backdrop image URL for a provider path fragment.
pub fn backdrop_url(path: &str, size: ImageSize) -> String {
    let variant = match size {
        ImageSize::Small => "w300",
        ImageSize::Medium => "w780",
        ImageSize::Large => "w1280",
        ImageSize::Original => "original",
    };
    format!("{}/{}{}", IMAGE_BASE_URL, variant, path)
}

/// Profile (person) image URL for a provider path fragment.
pub fn profile_url(path: &str, size: ImageSize) -> String {
    let variant = match size {
        ImageSize::Small => "w45",
        ImageSize::Medium => "w185",
        ImageSize::Large => "h632",
        ImageSize::Original => "original",
    };
    format!("{}/{}{}", IMAGE_BASE_URL, variant, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_url_variants() {
        let path = "/vZloFAK7NmvMGKE7VkF5UHaz0I.jpg";
        assert_eq!(
            poster_url(path, ImageSize::Small),
            "https://image.tmdb.org/t/p/w342/vZloFAK7NmvMGKE7VkF5UHaz0I.jpg"
        );
        assert_eq!(
            poster_url(path, ImageSize::Original),
            "https://image.tmdb.org/t/p/original/vZloFAK7NmvMGKE7VkF5UHaz0I.jpg"
        );
    }

    #[test]
    fn test_families_use_distinct_variants() {
        let path = "/x.jpg";
        assert_eq!(backdrop_url(path, ImageSize::Large), "https://image.tmdb.org/t/p/w1280/x.jpg");
        assert_eq!(profile_url(path, ImageSize::Large), "https://image.tmdb.org/t/p/h632/x.jpg");
        assert_eq!(profile_url(path, ImageSize::Small), "https://image.tmdb.org/t/p/w45/x.jpg");
    }
}
