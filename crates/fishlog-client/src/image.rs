//! Turns a picture on disk into the self-contained string stored with a
//! catch.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::Result;

/// Read `path` and encode it as a `data:` URI.
pub fn encode_image_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "encoding image");
    Ok(encode_image(&bytes, mime_for(path)))
}

pub fn encode_image(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "heic" => "image/heic",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_image_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catch.PNG");
        std::fs::write(&path, b"abc").unwrap();

        let uri = encode_image_file(&path).unwrap();
        assert_eq!(uri, "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(mime_for(Path::new("photo")), "application/octet-stream");
        assert_eq!(mime_for(Path::new("a.jpeg")), "image/jpeg");
    }

    #[test]
    fn test_missing_file() {
        assert!(encode_image_file(Path::new("/definitely/not/here.png")).is_err());
    }
}
