mod bookmarks;
pub mod dto;
mod folders;
pub mod response;
mod router;
mod settings;
mod transfer;
mod trash;
mod views;

pub use router::{AppState, create_router};
