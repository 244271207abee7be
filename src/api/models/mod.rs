pub mod movies;
pub mod users;

pub use movies::{DirectorResponse, GenreResponse, MovieResponse};
pub use users::{UpdateUserRequest, UserResponse};
