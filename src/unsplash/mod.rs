/// Unsplash search API module
///
/// This module is the single external-call boundary of the app:
/// - Typed response models (models.rs)
/// - The HTTP client issuing search and thumbnail requests (client.rs)

pub mod client;
pub mod models;

pub use client::{UnsplashClient, UnsplashError};
