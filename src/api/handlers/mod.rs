pub mod movies;
pub mod system;
pub mod users;

pub use movies::*;
pub use system::*;
pub use users::*;

use crate::auth::jwt::TokenService;
use crate::db::repository::{FavoriteRepository, MovieRepository, UserRepository};
use std::sync::Arc;

/// Shared application state for handlers
///
/// Constructed once at server startup and cloned per request; nothing in
/// here is mutated after construction.
#[derive(Clone)]
pub struct AppState {
    pub movie_repo: Arc<MovieRepository>,
    pub user_repo: Arc<UserRepository>,
    pub favorite_repo: Arc<FavoriteRepository>,
    pub tokens: Arc<TokenService>,
}
