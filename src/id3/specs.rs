use crate::common::error::{Result, WriterError};

/// Byte-order mark written before every UTF-16 field.
pub const BOM: [u8; 2] = [0xFF, 0xFE];

/// Text encodings an ID3v2.3 frame can declare in its first body byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Encoding {
    Latin1 = 0,
    Utf16 = 1,
}

impl Encoding {
    /// Size of the null terminator for this encoding.
    pub fn terminator_size(self) -> usize {
        match self {
            Encoding::Latin1 => 1,
            Encoding::Utf16 => 2,
        }
    }
}

/// Number of UTF-16 code units in `text`.
///
/// Every size formula counts characters this way, matching what the encoders emit.
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Encode text as single bytes, keeping the low 8 bits of each UTF-16 code unit.
///
/// Lossy: anything outside U+0000..=U+00FF is wrapped rather than rejected.
pub fn encode_latin1(text: &str) -> Vec<u8> {
    text.encode_utf16().map(|unit| unit as u8).collect()
}

/// Encode text as UTF-16LE code units, without a BOM.
pub fn encode_utf16le(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 2);
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out
}

/// Append `text` to `out` in the given encoding, preceded by a BOM for UTF-16.
pub fn write_text(out: &mut Vec<u8>, text: &str, encoding: Encoding) {
    match encoding {
        Encoding::Latin1 => out.extend(text.encode_utf16().map(|unit| unit as u8)),
        Encoding::Utf16 => {
            out.extend_from_slice(&BOM);
            for unit in text.encode_utf16() {
                out.extend_from_slice(&unit.to_le_bytes());
            }
        }
    }
}

/// Append the null terminator for `encoding`.
pub fn write_terminator(out: &mut Vec<u8>, encoding: Encoding) {
    out.extend(std::iter::repeat(0u8).take(encoding.terminator_size()));
}

/// Picture type byte of an APIC frame (0..=20).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PictureType {
    Other = 0,
    FileIcon = 1,
    OtherFileIcon = 2,
    CoverFront = 3,
    CoverBack = 4,
    LeafletPage = 5,
    Media = 6,
    LeadArtist = 7,
    Artist = 8,
    Conductor = 9,
    Band = 10,
    Composer = 11,
    Lyricist = 12,
    RecordingLocation = 13,
    DuringRecording = 14,
    DuringPerformance = 15,
    MovieCapture = 16,
    AFishEvenBrighter = 17,
    Illustration = 18,
    BandLogo = 19,
    PublisherLogo = 20,
}

impl PictureType {
    pub fn from_byte(b: u8) -> Option<Self> {
        let ty = match b {
            0 => PictureType::Other,
            1 => PictureType::FileIcon,
            2 => PictureType::OtherFileIcon,
            3 => PictureType::CoverFront,
            4 => PictureType::CoverBack,
            5 => PictureType::LeafletPage,
            6 => PictureType::Media,
            7 => PictureType::LeadArtist,
            8 => PictureType::Artist,
            9 => PictureType::Conductor,
            10 => PictureType::Band,
            11 => PictureType::Composer,
            12 => PictureType::Lyricist,
            13 => PictureType::RecordingLocation,
            14 => PictureType::DuringRecording,
            15 => PictureType::DuringPerformance,
            16 => PictureType::MovieCapture,
            17 => PictureType::AFishEvenBrighter,
            18 => PictureType::Illustration,
            19 => PictureType::BandLogo,
            20 => PictureType::PublisherLogo,
            _ => return None,
        };
        Some(ty)
    }
}

impl From<PictureType> for u8 {
    fn from(ty: PictureType) -> u8 {
        ty as u8
    }
}

/// SYLT content type byte (0 = other .. 6 = trivia).
pub const SYLT_CONTENT_TYPES: std::ops::RangeInclusive<u8> = 0..=6;

/// SYLT timestamp format byte (1 = MPEG frames, 2 = milliseconds).
pub const SYLT_TIMESTAMP_FORMATS: std::ops::RangeInclusive<u8> = 1..=2;

/// Validate an ISO 639-2 language code and return its three bytes.
pub fn language_code(language: &str) -> Result<[u8; 3]> {
    match language.as_bytes() {
        &[a, b, c] if [a, b, c].iter().all(u8::is_ascii_alphabetic) => Ok([a, b, c]),
        _ => Err(WriterError::LanguageCode(language.to_string())),
    }
}

/// Whether `key` is a valid TKEY value.
///
/// ID3v2.3 allows at most three characters: a note `A`-`G`, an optional `b` or `#`,
/// an optional trailing `m` for minor, or a lone `o` for off key.
pub fn is_valid_key(key: &str) -> bool {
    if key == "o" {
        return true;
    }

    let mut chars = key.chars().peekable();
    if !matches!(chars.next(), Some('A'..='G')) {
        return false;
    }
    if matches!(chars.peek(), Some('b' | '#')) {
        chars.next();
    }
    if chars.peek() == Some(&'m') {
        chars.next();
    }
    chars.next().is_none()
}
