use serde::{Deserialize, Serialize};

/// A movie as it appears in provider list responses.
///
/// Constructed fresh from each API response, never mutated, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub original_language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// The detail-endpoint shape. Unlike list entries this carries resolved
/// genre objects instead of genre_ids, plus credits and similar titles when
/// the request asked for them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub runtime: u32,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tagline: String,
    /// Currency units, 0 meaning unknown.
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    #[serde(default)]
    pub credits: Credits,
    #[serde(default)]
    pub similar: MovieList,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductionCompany {
    pub id: u64,
    pub name: String,
    pub logo_path: Option<String>,
    #[serde(default)]
    pub origin_country: String,
}

/// Cast order in the provider response is billing order and is preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub job: String,
    pub profile_path: Option<String>,
}

/// Sub-resource wrapper for embedded movie lists (e.g. similar titles).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MovieList {
    #[serde(default)]
    pub results: Vec<Movie>,
}
