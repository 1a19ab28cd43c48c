use std::fmt::{Display, Formatter};

/// Image formats recognised from their leading byte signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeType {
    Jpeg,
    Png,
    Gif,
    Webp,
    Tiff,
    Bmp,
    Icon,
}

impl MimeType {
    /// Get a &str from a `MimeType`
    pub fn as_str(&self) -> &'static str {
        match self {
            MimeType::Jpeg => "image/jpeg",
            MimeType::Png => "image/png",
            MimeType::Gif => "image/gif",
            MimeType::Webp => "image/webp",
            MimeType::Tiff => "image/tiff",
            MimeType::Bmp => "image/bmp",
            MimeType::Icon => "image/x-icon",
        }
    }
}

impl Display for MimeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guess an image's MIME type from its first bytes.
///
/// Only the signature is checked; truncated or corrupt image data is not detected.
pub fn sniff_mime(data: &[u8]) -> Option<MimeType> {
    match data {
        [0xFF, 0xD8, 0xFF, ..] => return Some(MimeType::Jpeg),
        [0x89, b'P', b'N', b'G', ..] => return Some(MimeType::Png),
        [b'G', b'I', b'F', ..] => return Some(MimeType::Gif),
        _ => {}
    }

    if data.get(8..12) == Some(b"WEBP".as_slice()) {
        return Some(MimeType::Webp);
    }

    match data {
        [b'I', b'I', 0x2A, 0x00, ..] | [b'M', b'M', 0x00, 0x2A, ..] => Some(MimeType::Tiff),
        [b'B', b'M', ..] => Some(MimeType::Bmp),
        [0x00, 0x00, 0x01, 0x00, ..] => Some(MimeType::Icon),
        _ => None,
    }
}
