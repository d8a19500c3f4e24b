//! Image source resolution
//!
//! Gallery `src` values are site paths like `/gallery/2025/dj-night.jpg`
//! (served from the site's public directory) or absolute http(s) URLs.

use std::path::{Path, PathBuf};

/// Where the bytes for a gallery item come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Local(PathBuf),
    Remote(String),
}

impl ImageSource {
    pub fn describe(&self) -> String {
        match self {
            ImageSource::Local(path) => path.display().to_string(),
            ImageSource::Remote(url) => url.clone(),
        }
    }
}

pub fn is_remote(src: &str) -> bool {
    let lower = src.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Percent-encode each segment of a site path, keeping the slashes
///
/// # Examples
/// ```
/// use festui::logic::source::encode_site_path;
///
/// assert_eq!(encode_site_path("/gallery/dj night.jpg"), "gallery/dj%20night.jpg");
/// ```
pub fn encode_site_path(path: &str) -> String {
    path.trim_start_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Resolve `src` to a local file under `public_dir`, or to a URL
///
/// Absolute URLs are used as-is. Site paths become URLs when a base URL is
/// configured, otherwise files under the public directory.
pub fn resolve_source(src: &str, public_dir: &Path, base_url: Option<&str>) -> ImageSource {
    let src = src.trim();
    if is_remote(src) {
        return ImageSource::Remote(src.to_string());
    }

    match base_url.map(str::trim).filter(|b| !b.is_empty()) {
        Some(base) => ImageSource::Remote(format!(
            "{}/{}",
            base.trim_end_matches('/'),
            encode_site_path(src)
        )),
        None => {
            let relative: PathBuf = src
                .trim_start_matches('/')
                .split('/')
                .filter(|segment| !segment.is_empty() && *segment != "..")
                .collect();
            ImageSource::Local(public_dir.join(relative))
        }
    }
}
