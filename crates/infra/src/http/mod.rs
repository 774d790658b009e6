//! HTTP plumbing shared by remote integrations

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
