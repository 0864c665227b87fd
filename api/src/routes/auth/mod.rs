//! Authentication route handlers
//!
//! - Signup
//! - Email/password login
//! - Access token reissue

pub mod login;
pub mod reissue;
pub mod signup;

pub use login::login;
pub use reissue::reissue;
pub use signup::signup;
