//! Festival content bundled as JSON
//!
//! `galleryConfig.json` holds the categories and media items shown in the
//! gallery; `siteConfig.json` holds fest-wide text (name, year, dates,
//! section titles). Both files are read once at startup and never written.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const GALLERY_FILE: &str = "galleryConfig.json";
pub const SITE_CONFIG_FILE: &str = "siteConfig.json";

const DEFAULT_FEST_NAME: &str = "SPOORTHI";
const DEFAULT_YEAR: &str = "2026";
const DEFAULT_COUNTDOWN_TARGET: &str = "2026-04-08T00:00:00";
const DEFAULT_START_DATE: &str = "2026-04-08";
const DEFAULT_END_DATE: &str = "2026-04-09";
const DEFAULT_DATES_TEXT: &str = "April 8th & 9th, 2026";
const DEFAULT_GALLERY_TITLE: &str = "PAST FEST MEMORIES";
const DEFAULT_GALLERY_SUBTITLE: &str = "Relive the magic from our previous editions";
const DEFAULT_HIGHLIGHTS_TITLE: &str = "Previous Highlights";
const DEFAULT_HIGHLIGHTS_SUBTITLE: &str =
    "See what this event looked like in our previous editions";
const DEFAULT_COMING_SOON: &str =
    "Event registrations and details will be announced soon. Stay connected!";

/// Kind of media behind a gallery item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

/// A single photo or video in the gallery
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub src: String,
    #[serde(default)]
    pub caption: String,
    pub category: String,
    #[serde(rename = "type", default)]
    pub media_type: MediaType,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, deserialize_with = "deserialize_aspect_ratio")]
    pub aspect_ratio: Option<f32>,
}

impl GalleryItem {
    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }

    /// Caption, or a generic label when the item has none
    pub fn display_caption(&self) -> &str {
        if self.caption.trim().is_empty() {
            "Gallery image"
        } else {
            &self.caption
        }
    }
}

/// A filter tab in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
}

/// Contents of `galleryConfig.json`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GalleryData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub items: Vec<GalleryItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FestDates {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub display_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GallerySettings {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub event_section_title: Option<String>,
    pub event_section_subtitle: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ComingSoon {
    #[serde(default)]
    pub enabled: bool,
    pub message: Option<String>,
}

/// Contents of `siteConfig.json`
///
/// Every field is optional; accessors fall back to the defaults the site
/// ships with when a value is missing or blank.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub fest_name: Option<String>,
    pub current_year: Option<String>,
    pub tagline: Option<String>,
    pub college: Option<String>,
    pub countdown_target: Option<String>,
    #[serde(default)]
    pub fest_dates: FestDates,
    #[serde(default)]
    pub gallery: GallerySettings,
    #[serde(default)]
    pub coming_soon: ComingSoon,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl SiteConfig {
    pub fn fest_name(&self) -> &str {
        non_blank(&self.fest_name).unwrap_or(DEFAULT_FEST_NAME)
    }

    pub fn current_year(&self) -> &str {
        non_blank(&self.current_year).unwrap_or(DEFAULT_YEAR)
    }

    pub fn countdown_target(&self) -> &str {
        non_blank(&self.countdown_target).unwrap_or(DEFAULT_COUNTDOWN_TARGET)
    }

    pub fn start_date(&self) -> &str {
        non_blank(&self.fest_dates.start_date).unwrap_or(DEFAULT_START_DATE)
    }

    pub fn end_date(&self) -> &str {
        non_blank(&self.fest_dates.end_date).unwrap_or(DEFAULT_END_DATE)
    }

    pub fn dates_text(&self) -> &str {
        non_blank(&self.fest_dates.display_text).unwrap_or(DEFAULT_DATES_TEXT)
    }

    pub fn coming_soon_message(&self) -> &str {
        non_blank(&self.coming_soon.message).unwrap_or(DEFAULT_COMING_SOON)
    }

    pub fn highlights_title(&self) -> &str {
        non_blank(&self.gallery.event_section_title).unwrap_or(DEFAULT_HIGHLIGHTS_TITLE)
    }

    pub fn highlights_subtitle(&self) -> &str {
        non_blank(&self.gallery.event_section_subtitle).unwrap_or(DEFAULT_HIGHLIGHTS_SUBTITLE)
    }

    /// Gallery title: site config first, then the gallery file, then the default
    pub fn gallery_title<'a>(&'a self, data: &'a GalleryData) -> &'a str {
        non_blank(&self.gallery.title)
            .or_else(|| non_blank(&data.title))
            .unwrap_or(DEFAULT_GALLERY_TITLE)
    }

    pub fn gallery_subtitle<'a>(&'a self, data: &'a GalleryData) -> &'a str {
        non_blank(&self.gallery.subtitle)
            .or_else(|| non_blank(&data.subtitle))
            .unwrap_or(DEFAULT_GALLERY_SUBTITLE)
    }
}

/// Everything the app reads from the data directory
#[derive(Debug, Clone, Default)]
pub struct ContentBundle {
    pub gallery: GalleryData,
    pub site: SiteConfig,
    pub data_dir: PathBuf,
}

impl ContentBundle {
    /// Load `galleryConfig.json` (required) and `siteConfig.json` (optional)
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        let gallery = load_gallery_data(&data_dir.join(GALLERY_FILE))?;

        let site_path = data_dir.join(SITE_CONFIG_FILE);
        let site = if site_path.exists() {
            load_site_config(&site_path)?
        } else {
            SiteConfig::default()
        };

        Ok(Self {
            gallery,
            site,
            data_dir: data_dir.to_path_buf(),
        })
    }
}

pub fn load_gallery_data(path: &Path) -> Result<GalleryData> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read gallery data from {}", path.display()))?;
    parse_gallery_data(&raw)
        .with_context(|| format!("Invalid gallery data in {}", path.display()))
}

/// Parse gallery data; item ids must be unique once read as text, so `1`
/// and `"1"` clash
pub fn parse_gallery_data(raw: &str) -> Result<GalleryData> {
    let data: GalleryData = serde_json::from_str(raw)?;

    {
        let mut seen = HashSet::new();
        for item in &data.items {
            if !seen.insert(item.id.as_str()) {
                bail!("Duplicate gallery item id '{}'", item.id);
            }
        }
    }
    Ok(data)
}

pub fn load_site_config(path: &Path) -> Result<SiteConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read site config from {}", path.display()))?;
    let config = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid site config in {}", path.display()))?;
    Ok(config)
}

/// Ids show up as both numbers and strings in the content files
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

/// Accepts `1.5`, `"1.5"` or a CSS-style `"4/3"`; anything else is dropped
fn deserialize_aspect_ratio<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRatio {
        Number(f32),
        Text(String),
    }

    let ratio = match Option::<RawRatio>::deserialize(deserializer)? {
        Some(RawRatio::Number(n)) => Some(n),
        Some(RawRatio::Text(s)) => parse_ratio(&s),
        None => None,
    };
    Ok(ratio.filter(|r| r.is_finite() && *r > 0.0))
}

fn parse_ratio(text: &str) -> Option<f32> {
    match text.split_once('/') {
        Some((w, h)) => {
            let w: f32 = w.trim().parse().ok()?;
            let h: f32 = h.trim().parse().ok()?;
            if h == 0.0 {
                None
            } else {
                Some(w / h)
            }
        }
        None => text.trim().parse().ok(),
    }
}
