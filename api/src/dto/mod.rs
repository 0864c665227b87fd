pub mod auth_dto;
pub mod error;
pub mod user_dto;

pub use error::{ErrorResponse, ErrorResponseExt};
