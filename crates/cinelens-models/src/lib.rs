pub mod movie;
pub mod person;
pub mod review;
pub mod user;
pub mod video;

pub use movie::{CastMember, Credits, CrewMember, Genre, Movie, MovieDetails, MovieList, ProductionCompany};
pub use person::Actor;
pub use review::{ReviewDraft, UserReview};
pub use user::User;
pub use video::Video;
