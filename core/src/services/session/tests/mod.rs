//! Tests for session authentication
