use anyhow::{Context, Result};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use festui::logic::errors::{classify_error, format_error_message, PreviewErrorType};
use festui::logic::source::ImageSource;
use festui::utils::log_debug;

/// Images larger than this are not decoded
pub const MAX_IMAGE_BYTES: u64 = 20 * 1024 * 1024;

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone, Debug)]
pub struct ImageMetadata {
    pub dimensions: Option<(u32, u32)>,
    pub format: Option<String>,
    pub file_size: u64,
}

/// Lightbox preview for one gallery item
pub enum PreviewState {
    Loading,
    Ready {
        protocol: ratatui_image::protocol::StatefulProtocol,
        metadata: ImageMetadata,
    },
    Failed {
        error_type: PreviewErrorType,
        message: String,
    },
}

impl std::fmt::Debug for PreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreviewState::Loading => write!(f, "PreviewState::Loading"),
            PreviewState::Ready { metadata, .. } => f
                .debug_struct("PreviewState::Ready")
                .field("metadata", metadata)
                .field("protocol", &"<StatefulProtocol>")
                .finish(),
            PreviewState::Failed {
                error_type,
                message,
            } => f
                .debug_struct("PreviewState::Failed")
                .field("error_type", error_type)
                .field("message", message)
                .finish(),
        }
    }
}

impl PreviewState {
    /// Whether opening the item should start a load: never tried, or the
    /// last attempt failed
    pub fn needs_load(existing: Option<&PreviewState>) -> bool {
        matches!(existing, None | Some(PreviewState::Failed { .. }))
    }
}

pub type PreviewUpdate = (String, PreviewState);

/// Build the shared HTTP client for remote image sources
pub fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")
}

/// Spawn a background task that decodes `source` and reports back on `tx`
pub fn spawn_image_load(
    item_id: String,
    source: ImageSource,
    picker: ratatui_image::picker::Picker,
    client: reqwest::Client,
    tx: mpsc::UnboundedSender<PreviewUpdate>,
) {
    tokio::spawn(async move {
        log_debug(&format!("Background: Loading image {}", source.describe()));
        let state = match load_preview(&source, picker, &client).await {
            Ok((protocol, metadata)) => {
                log_debug(&format!("Background: Image ready for item '{}'", item_id));
                PreviewState::Ready { protocol, metadata }
            }
            Err(e) => {
                log_debug(&format!(
                    "Background: Image failed for item '{}': {:#}",
                    item_id, e
                ));
                PreviewState::Failed {
                    error_type: classify_error(&e),
                    message: format_error_message(&e),
                }
            }
        };
        // Receiver gone means the app is shutting down
        let _ = tx.send((item_id, state));
    });
}

async fn load_preview(
    source: &ImageSource,
    picker: ratatui_image::picker::Picker,
    client: &reqwest::Client,
) -> Result<(ratatui_image::protocol::StatefulProtocol, ImageMetadata)> {
    let load_start = Instant::now();

    let (img, file_size) = match source {
        ImageSource::Local(path) => {
            let file_size = tokio::fs::metadata(path)
                .await
                .with_context(|| format!("Cannot read {}", path.display()))?
                .len();
            ensure_size(file_size)?;
            let path = path.clone();
            let img = tokio::task::spawn_blocking(move || image::open(&path))
                .await
                .context("Image decode task failed")??;
            (img, file_size)
        }
        ImageSource::Remote(url) => {
            let mut response = client
                .get(url)
                .send()
                .await
                .with_context(|| format!("Failed to fetch {}", url))?
                .error_for_status()?;
            if let Some(len) = response.content_length() {
                ensure_size(len)?;
            }
            // Content-Length can be missing or wrong; enforce the limit per chunk
            let mut bytes = Vec::new();
            while let Some(chunk) = response.chunk().await? {
                append_chunk(&mut bytes, &chunk)?;
            }
            let file_size = bytes.len() as u64;
            let img = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
                .await
                .context("Image decode task failed")??;
            (img, file_size)
        }
    };

    let dimensions = (img.width(), img.height());
    let format = color_label(img.color());
    log_debug(&format!(
        "Loaded image: {}x{} pixels, {}",
        dimensions.0,
        dimensions.1,
        festui::utils::format_bytes(file_size)
    ));

    let (max_width, max_height) = max_preview_size(picker.font_size());
    let processed = match downscale_filter(dimensions, (max_width, max_height)) {
        Some(filter) => {
            log_debug(&format!(
                "Pre-downscaling {}x{} to fit {}x{} with {:?}",
                dimensions.0, dimensions.1, max_width, max_height, filter
            ));
            img.resize(max_width, max_height, filter)
        }
        None => img,
    };

    let protocol = picker.new_resize_protocol(processed);
    log_debug(&format!(
        "Total image load took {:.2}s",
        load_start.elapsed().as_secs_f32()
    ));

    Ok((
        protocol,
        ImageMetadata {
            dimensions: Some(dimensions),
            format: Some(format.to_string()),
            file_size,
        },
    ))
}

fn ensure_size(file_size: u64) -> Result<()> {
    if file_size > MAX_IMAGE_BYTES {
        anyhow::bail!(
            "Image too large ({} > {})",
            festui::utils::format_bytes(file_size),
            festui::utils::format_bytes(MAX_IMAGE_BYTES)
        );
    }
    Ok(())
}

/// Append a downloaded chunk, failing once the body passes the size limit
fn append_chunk(body: &mut Vec<u8>, chunk: &[u8]) -> Result<()> {
    ensure_size((body.len() + chunk.len()) as u64)?;
    body.extend_from_slice(chunk);
    Ok(())
}

/// Largest pixel size worth keeping: ~200x60 cells with 1.25x headroom
fn max_preview_size(font_size: (u16, u16)) -> (u32, u32) {
    (
        200 * font_size.0 as u32 * 5 / 4,
        60 * font_size.1 as u32 * 5 / 4,
    )
}

/// Resize filter for an image that exceeds `max`, or `None` if it fits
///
/// Heavier downscales trade quality for speed.
fn downscale_filter(
    dimensions: (u32, u32),
    max: (u32, u32),
) -> Option<image::imageops::FilterType> {
    if dimensions.0 <= max.0 && dimensions.1 <= max.1 {
        return None;
    }
    let scale_factor =
        (dimensions.0 as f32 / max.0 as f32).max(dimensions.1 as f32 / max.1 as f32);
    let filter = if scale_factor > 4.0 {
        image::imageops::FilterType::Triangle
    } else if scale_factor > 2.0 {
        image::imageops::FilterType::CatmullRom
    } else {
        image::imageops::FilterType::Lanczos3
    };
    Some(filter)
}

fn color_label(color: image::ColorType) -> &'static str {
    match color {
        image::ColorType::L8 => "Grayscale 8-bit",
        image::ColorType::La8 => "Grayscale+Alpha 8-bit",
        image::ColorType::Rgb8 => "RGB 8-bit",
        image::ColorType::Rgba8 => "RGBA 8-bit",
        image::ColorType::L16 => "Grayscale 16-bit",
        image::ColorType::La16 => "Grayscale+Alpha 16-bit",
        image::ColorType::Rgb16 => "RGB 16-bit",
        image::ColorType::Rgba16 => "RGBA 16-bit",
        image::ColorType::Rgb32F => "RGB 32-bit float",
        image::ColorType::Rgba32F => "RGBA 32-bit float",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::imageops::FilterType;

    #[test]
    fn test_max_preview_size() {
        assert_eq!(max_preview_size((8, 16)), (2000, 1200));
    }

    #[test]
    fn test_downscale_filter() {
        let max = (2000, 1200);
        assert_eq!(downscale_filter((1920, 1080), max), None);
        assert_eq!(downscale_filter((3000, 1000), max), Some(FilterType::Lanczos3));
        assert_eq!(downscale_filter((6000, 1000), max), Some(FilterType::CatmullRom));
        assert_eq!(downscale_filter((1000, 6000), max), Some(FilterType::Triangle));
    }

    #[test]
    fn test_ensure_size() {
        assert!(ensure_size(MAX_IMAGE_BYTES).is_ok());
        let err = ensure_size(MAX_IMAGE_BYTES + 1).unwrap_err();
        assert_eq!(classify_error(&err), PreviewErrorType::TooLarge);
    }

    #[test]
    fn test_append_chunk_stops_past_limit() {
        let mut body = Vec::new();
        let half = vec![0u8; (MAX_IMAGE_BYTES / 2) as usize];
        append_chunk(&mut body, &half).unwrap();
        append_chunk(&mut body, &half).unwrap();
        assert_eq!(body.len() as u64, MAX_IMAGE_BYTES);

        let err = append_chunk(&mut body, &[0u8]).unwrap_err();
        assert_eq!(classify_error(&err), PreviewErrorType::TooLarge);
        assert_eq!(body.len() as u64, MAX_IMAGE_BYTES);
    }

    #[test]
    fn test_failed_preview_is_reloaded() {
        assert!(PreviewState::needs_load(None));
        assert!(!PreviewState::needs_load(Some(&PreviewState::Loading)));
        let failed = PreviewState::Failed {
            error_type: PreviewErrorType::Network,
            message: "connection reset".to_string(),
        };
        assert!(PreviewState::needs_load(Some(&failed)));
    }

    #[tokio::test]
    async fn test_missing_local_file_is_not_found() {
        let picker = ratatui_image::picker::Picker::from_fontsize((8, 16));
        let client = reqwest::Client::new();
        let source = ImageSource::Local(std::env::temp_dir().join("festui-no-such-image.jpg"));
        let err = match load_preview(&source, picker, &client).await {
            Err(e) => e,
            Ok(_) => panic!("expected a load failure"),
        };
        assert_eq!(classify_error(&err), PreviewErrorType::NotFound);
    }
}
