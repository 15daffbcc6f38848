//! Entry model for the APOD dataset
//!
//! Records are externally supplied and never validated: every field
//! defaults when absent so a partial record decodes instead of failing
//! the whole payload.

use serde::{Deserialize, Serialize};

/// Preview image used for video entries that carry no thumbnail.
pub const VIDEO_PLACEHOLDER_URL: &str =
    "https://via.placeholder.com/800x450?text=Video+Unavailable";

/// One daily astronomy-picture record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApodEntry {
    /// Canonical `YYYY-MM-DD` date, the sole sort/filter key.
    pub date: String,
    pub title: String,
    /// `"image"` or `"video"`; anything else renders through the image branch.
    pub media_type: String,
    /// Primary media location (image source or video embed source).
    pub url: String,
    /// Higher-resolution image alternative, when published.
    pub hdurl: Option<String>,
    /// Video preview image, when published.
    pub thumbnail_url: Option<String>,
    /// Free-text description, shown only in the detail view.
    pub explanation: String,
}

impl ApodEntry {
    pub fn is_video(&self) -> bool {
        self.media_type == "video"
    }

    /// Title with a media-kind fallback for untitled entries.
    pub fn display_title(&self) -> &str {
        if !self.title.is_empty() {
            &self.title
        } else if self.is_video() {
            "NASA Video"
        } else {
            "NASA Image"
        }
    }

    /// Accessible-text variant of the title fallback (`alt`, iframe
    /// `title`), lowercase like the dataset's own captions.
    pub fn alt_text(&self) -> &str {
        if !self.title.is_empty() {
            &self.title
        } else if self.is_video() {
            "NASA video"
        } else {
            "NASA image"
        }
    }

    /// Grid preview source: videos use their thumbnail (or a placeholder
    /// when none is published), images use the primary location.
    pub fn preview_url(&self) -> &str {
        if self.is_video() {
            match self.thumbnail_url.as_deref() {
                Some(thumbnail) if !thumbnail.is_empty() => thumbnail,
                _ => VIDEO_PLACEHOLDER_URL,
            }
        } else {
            &self.url
        }
    }

    /// Detail-view image source: `hdurl` when published, else `url`.
    pub fn full_image_url(&self) -> &str {
        match self.hdurl.as_deref() {
            Some(hdurl) if !hdurl.is_empty() => hdurl,
            _ => &self.url,
        }
    }
}
