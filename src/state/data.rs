/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the search gateway and the UI layer.

use iced::widget::image;

use crate::unsplash::models::{Photo, PhotoUrls};

/// Represents a single search result in the current gallery
#[derive(Debug, Clone)]
pub struct ImageRecord {
    /// Unique identifier assigned by the search API
    pub id: String,
    /// Alt-text description of the photo (not every photo has one)
    pub description: Option<String>,
    /// The image URLs returned for this photo, by size tier
    pub urls: PhotoUrls,
    /// Whether the user marked this image as saved.
    /// Client-side only; never sent back to the server.
    pub saved: bool,
    /// Decoded thumbnail, attached once its bytes arrive.
    /// None while the download is still in flight (or failed).
    pub thumbnail: Option<image::Handle>,
}

impl From<Photo> for ImageRecord {
    fn from(photo: Photo) -> Self {
        ImageRecord {
            id: photo.id,
            description: photo.alt_description,
            urls: photo.urls,
            saved: false,
            thumbnail: None,
        }
    }
}

impl ImageRecord {
    /// The label used in save notifications when the photo
    /// carries no description
    pub const FALLBACK_LABEL: &'static str = "image";

    /// Description to display, falling back to a generic label
    pub fn label(&self) -> &str {
        self.description.as_deref().unwrap_or(Self::FALLBACK_LABEL)
    }
}
