/// Typed models for the Unsplash search API response
///
/// Only the fields the gallery consumes are modeled; serde skips the
/// rest of the (large) photo objects the API returns.

use serde::Deserialize;

/// Top-level response of `GET /search/photos`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// The photos matching the query, in relevance order
    pub results: Vec<Photo>,
}

/// One photo entry in the search results
#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    /// Unsplash photo id (an opaque short string)
    pub id: String,
    /// Alt text for the photo; null for many photos
    pub alt_description: Option<String>,
    /// Pre-rendered image URLs by size tier
    pub urls: PhotoUrls,
}

/// The size tiers Unsplash renders for every photo
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PhotoUrls {
    /// ~1080px wide, used for full-card display
    pub regular: String,
    /// ~400px wide, used for grid thumbnails
    pub small: String,
    /// ~200px wide
    #[serde(default)]
    pub thumb: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed-down but structurally faithful API response
    const FIXTURE: &str = r##"{
        "total": 133,
        "total_pages": 7,
        "results": [
            {
                "id": "eOLpJytrbsQ",
                "created_at": "2014-11-18T14:35:36-05:00",
                "width": 4000,
                "height": 3000,
                "color": "#A7A2A1",
                "likes": 286,
                "description": "A man drinking a coffee.",
                "alt_description": "man sipping coffee at a desk",
                "urls": {
                    "raw": "https://images.unsplash.com/photo-1416339306562-f3d12fefd36f",
                    "full": "https://images.unsplash.com/photo-1416339306562-f3d12fefd36f?q=75&fm=jpg",
                    "regular": "https://images.unsplash.com/photo-1416339306562-f3d12fefd36f?q=75&fm=jpg&w=1080",
                    "small": "https://images.unsplash.com/photo-1416339306562-f3d12fefd36f?q=75&fm=jpg&w=400",
                    "thumb": "https://images.unsplash.com/photo-1416339306562-f3d12fefd36f?q=75&fm=jpg&w=200"
                }
            },
            {
                "id": "xyz123",
                "alt_description": null,
                "urls": {
                    "regular": "https://images.unsplash.com/photo-2?w=1080",
                    "small": "https://images.unsplash.com/photo-2?w=400"
                }
            }
        ]
    }"##;

    #[test]
    fn test_parse_search_response() {
        let response: SearchResponse = serde_json::from_str(FIXTURE).unwrap();

        assert_eq!(response.results.len(), 2);

        let first = &response.results[0];
        assert_eq!(first.id, "eOLpJytrbsQ");
        assert_eq!(
            first.alt_description.as_deref(),
            Some("man sipping coffee at a desk")
        );
        assert!(first.urls.small.contains("w=400"));

        // Photos without alt text or a thumb tier still parse
        let second = &response.results[1];
        assert_eq!(second.alt_description, None);
        assert_eq!(second.urls.thumb, None);
    }

    #[test]
    fn test_parse_empty_results() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"total": 0, "total_pages": 0, "results": []}"#).unwrap();
        assert!(response.results.is_empty());
    }
}
