pub mod error_handler;

pub use error_handler::{
    error_code, error_status, handle_authentication_failure, handle_domain_error,
    handle_validation_errors, json_error_handler,
};
