use crate::InferenceError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageMime {
    Jpeg,
    Png,
}

impl ImageMime {
    /// Value for the file picker's `accept` attribute.
    pub const ACCEPT: &'static str = ".jpg,.jpeg,.png,image/jpeg,image/png";

    pub fn from_content_type(content_type: &str) -> Result<Self, InferenceError> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Ok(ImageMime::Jpeg),
            "image/png" => Ok(ImageMime::Png),
            _ => Err(unsupported(content_type)),
        }
    }

    pub fn from_file_name(file_name: &str) -> Result<Self, InferenceError> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "jpg" | "jpeg" => Ok(ImageMime::Jpeg),
            "png" => Ok(ImageMime::Png),
            _ => Err(unsupported(file_name)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMime::Jpeg => "image/jpeg",
            ImageMime::Png => "image/png",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageMime::Jpeg => "jpg",
            ImageMime::Png => "png",
        }
    }
}

fn unsupported(what: &str) -> InferenceError {
    InferenceError::UploadRejected {
        reason: format!("{} is not a JPEG or PNG image", what),
    }
}

/// Image bytes as received from the user, valid for one analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub bytes: Vec<u8>,
    pub mime: ImageMime,
}

impl UploadedImage {
    pub fn new(bytes: Vec<u8>, mime: ImageMime) -> Result<Self, InferenceError> {
        if bytes.is_empty() {
            return Err(InferenceError::UploadRejected {
                reason: "the uploaded file is empty".into(),
            });
        }
        Ok(Self { bytes, mime })
    }

    pub fn file_name(&self) -> String {
        format!("banana.{}", self.mime.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types() {
        assert_eq!(ImageMime::from_content_type("image/jpeg").unwrap(), ImageMime::Jpeg);
        assert_eq!(ImageMime::from_content_type("IMAGE/JPG").unwrap(), ImageMime::Jpeg);
        assert_eq!(
            ImageMime::from_content_type("image/png; charset=binary").unwrap(),
            ImageMime::Png
        );
        assert!(matches!(
            ImageMime::from_content_type("image/webp"),
            Err(InferenceError::UploadRejected { .. })
        ));
        assert!(ImageMime::from_content_type("").is_err());
    }

    #[test]
    fn file_names() {
        assert_eq!(ImageMime::from_file_name("banana.JPEG").unwrap(), ImageMime::Jpeg);
        assert_eq!(ImageMime::from_file_name("a.b.png").unwrap(), ImageMime::Png);
        assert!(ImageMime::from_file_name("banana.gif").is_err());
        assert!(ImageMime::from_file_name("banana").is_err());
    }

    #[test]
    fn empty_upload_is_rejected() {
        let err = UploadedImage::new(Vec::new(), ImageMime::Png).unwrap_err();
        assert!(matches!(err, InferenceError::UploadRejected { .. }));
    }

    #[test]
    fn file_name_follows_mime() {
        let image = UploadedImage::new(vec![1, 2, 3], ImageMime::Jpeg).unwrap();
        assert_eq!(image.file_name(), "banana.jpg");
    }
}
