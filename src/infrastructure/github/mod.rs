//! GitHub REST API client

pub mod client;

pub use client::GitHubClient;
