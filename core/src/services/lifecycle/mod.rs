//! Session lifecycle: signup, login and reissue

mod service;

#[cfg(test)]
mod tests;

pub use service::TokenLifecycleService;
