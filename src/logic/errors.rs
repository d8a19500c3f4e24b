use anyhow::Error;

/// Why a lightbox preview could not be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewErrorType {
    NotFound,
    Timeout,
    HttpStatus(u16),
    Decode,
    TooLarge,
    Network,
    Other,
}

impl PreviewErrorType {
    pub fn label(&self) -> String {
        match self {
            PreviewErrorType::NotFound => "Image not found".to_string(),
            PreviewErrorType::Timeout => "Timed out".to_string(),
            PreviewErrorType::HttpStatus(code) => format!("HTTP {}", code),
            PreviewErrorType::Decode => "Unsupported or corrupt image".to_string(),
            PreviewErrorType::TooLarge => "Image too large".to_string(),
            PreviewErrorType::Network => "Network error".to_string(),
            PreviewErrorType::Other => "Preview unavailable".to_string(),
        }
    }
}

/// Classify an image loading error based on its type and error chain
pub fn classify_error(error: &Error) -> PreviewErrorType {
    if let Some(io_err) = error.downcast_ref::<std::io::Error>() {
        if io_err.kind() == std::io::ErrorKind::NotFound {
            return PreviewErrorType::NotFound;
        }
    }

    if let Some(reqwest_err) = error.downcast_ref::<reqwest::Error>() {
        if let Some(status) = reqwest_err.status() {
            return match status.as_u16() {
                404 => PreviewErrorType::NotFound,
                code => PreviewErrorType::HttpStatus(code),
            };
        }
        if reqwest_err.is_timeout() {
            return PreviewErrorType::Timeout;
        }
    }

    if error.downcast_ref::<image::ImageError>().is_some() {
        return PreviewErrorType::Decode;
    }

    let error_msg = error.to_string().to_lowercase();
    if error_msg.contains("no such file") || error_msg.contains("not found") {
        return PreviewErrorType::NotFound;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return PreviewErrorType::Timeout;
    }
    if error_msg.contains("too large") {
        return PreviewErrorType::TooLarge;
    }
    if error_msg.contains("dns") || error_msg.contains("network") || error_msg.contains("connection") {
        return PreviewErrorType::Network;
    }

    PreviewErrorType::Other
}

/// Root cause of an error chain, for the lightbox detail line
pub fn format_error_message(error: &Error) -> String {
    error
        .chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_missing_file() {
        let err = anyhow::Error::new(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(classify_error(&err), PreviewErrorType::NotFound);
    }

    #[test]
    fn test_classify_missing_file_message() {
        let err = anyhow::anyhow!("No such file or directory (os error 2)");
        assert_eq!(classify_error(&err), PreviewErrorType::NotFound);
    }

    #[test]
    fn test_classify_timeout() {
        let err = anyhow::anyhow!("request timed out");
        assert_eq!(classify_error(&err), PreviewErrorType::Timeout);
    }

    #[test]
    fn test_classify_too_large() {
        let err = anyhow::anyhow!("image too large: 40 MB");
        assert_eq!(classify_error(&err), PreviewErrorType::TooLarge);
    }

    #[test]
    fn test_classify_network() {
        let err = anyhow::anyhow!("dns lookup failed");
        assert_eq!(classify_error(&err), PreviewErrorType::Network);
    }

    #[test]
    fn test_classify_other() {
        let err = anyhow::anyhow!("something odd");
        assert_eq!(classify_error(&err), PreviewErrorType::Other);
        assert_eq!(PreviewErrorType::Other.label(), "Preview unavailable");
    }

    #[test]
    fn test_format_shows_root_cause() {
        let inner = anyhow::anyhow!("tcp connect error");
        let outer = inner.context("Failed to fetch /gallery/a.jpg");
        assert_eq!(format_error_message(&outer), "tcp connect error");
    }

    #[test]
    fn test_format_preserves_simple_errors() {
        let err = anyhow::anyhow!("custom error message");
        assert_eq!(format_error_message(&err), "custom error message");
    }

    #[test]
    fn test_http_status_label() {
        assert_eq!(PreviewErrorType::HttpStatus(503).label(), "HTTP 503");
    }
}
