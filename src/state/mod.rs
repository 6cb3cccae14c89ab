/// State management module
///
/// This module handles all application state, including:
/// - The working set of search results (gallery.rs)
/// - Shared data structures (data.rs)

pub mod data;
pub mod gallery;
