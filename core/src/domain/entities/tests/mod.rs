//! Tests for domain entities

mod token_tests;
