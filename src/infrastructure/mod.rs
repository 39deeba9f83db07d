//! External service integrations

pub mod github;
