use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::common::error::{Result, WriterError};
use crate::id3::header::{u32_to_bytes, HEADER_SIZE};
use crate::id3::mime::{sniff_mime, MimeType};
use crate::id3::sizes;
use crate::id3::specs::{self, text_len, Encoding, PictureType};

/// How a frame's value is validated and laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Several strings joined by `delimiter`, written as UTF-16.
    TextList { delimiter: &'static str },
    /// A single UTF-16 string.
    UnicodeText,
    /// A single string written one byte per character.
    Latin1Text,
    /// A decimal integer written as Latin1 digits.
    Integer,
    /// A bare Latin1 URL with no encoding byte.
    UrlLink,
    Lyrics,
    Comment,
    UserText,
    Private,
    InvolvedPeople,
    SynchronisedLyrics,
    Picture,
}

macro_rules! frame_ids {
    ($($variant:ident => $id:literal, $kind:expr;)+) => {
        /// Every frame identifier this crate can write.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum FrameId {
            $($variant,)+
        }

        impl FrameId {
            pub const ALL: &'static [FrameId] = &[$(FrameId::$variant,)+];

            /// The 4-character identifier, e.g. "TIT2".
            pub fn as_str(self) -> &'static str {
                match self {
                    $(FrameId::$variant => $id,)+
                }
            }

            pub fn kind(self) -> FrameKind {
                match self {
                    $(FrameId::$variant => $kind,)+
                }
            }
        }

        impl FromStr for FrameId {
            type Err = WriterError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($id => Ok(FrameId::$variant),)+
                    _ => Err(WriterError::UnsupportedFrame(s.to_string())),
                }
            }
        }
    };
}

frame_ids! {
    // Lists of strings
    Tpe1 => "TPE1", FrameKind::TextList { delimiter: "/" }; // performers
    Tcom => "TCOM", FrameKind::TextList { delimiter: "/" }; // composers
    Tcon => "TCON", FrameKind::TextList { delimiter: ";" }; // genres

    // Strings
    Tlan => "TLAN", FrameKind::UnicodeText;
    Tit1 => "TIT1", FrameKind::UnicodeText; // content group
    Tit2 => "TIT2", FrameKind::UnicodeText; // title
    Tit3 => "TIT3", FrameKind::UnicodeText; // subtitle
    Talb => "TALB", FrameKind::UnicodeText;
    Tpe2 => "TPE2", FrameKind::UnicodeText; // album artist
    Tpe3 => "TPE3", FrameKind::UnicodeText; // conductor
    Tpe4 => "TPE4", FrameKind::UnicodeText; // remixer
    Trck => "TRCK", FrameKind::UnicodeText; // 5 or 5/10
    Tpos => "TPOS", FrameKind::UnicodeText; // 1 or 1/3
    Tmed => "TMED", FrameKind::UnicodeText;
    Tpub => "TPUB", FrameKind::UnicodeText;
    Tcop => "TCOP", FrameKind::UnicodeText;
    Tkey => "TKEY", FrameKind::UnicodeText;
    Text => "TEXT", FrameKind::UnicodeText; // lyricist
    Tsrc => "TSRC", FrameKind::UnicodeText; // ISRC
    Tdat => "TDAT", FrameKind::Latin1Text; // DDMM

    // Integers
    Tbpm => "TBPM", FrameKind::Integer;
    Tlen => "TLEN", FrameKind::Integer; // milliseconds
    Tyer => "TYER", FrameKind::Integer;

    // URL links
    Wcom => "WCOM", FrameKind::UrlLink;
    Wcop => "WCOP", FrameKind::UrlLink;
    Woaf => "WOAF", FrameKind::UrlLink;
    Woar => "WOAR", FrameKind::UrlLink;
    Woas => "WOAS", FrameKind::UrlLink;
    Wors => "WORS", FrameKind::UrlLink;
    Wpay => "WPAY", FrameKind::UrlLink;
    Wpub => "WPUB", FrameKind::UrlLink;

    // Structured
    Uslt => "USLT", FrameKind::Lyrics;
    Comm => "COMM", FrameKind::Comment;
    Txxx => "TXXX", FrameKind::UserText;
    Priv => "PRIV", FrameKind::Private;
    Ipls => "IPLS", FrameKind::InvolvedPeople;
    Sylt => "SYLT", FrameKind::SynchronisedLyrics;
    Apic => "APIC", FrameKind::Picture;
}

impl Display for FrameId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unsynchronised lyrics (USLT).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LyricsValue {
    /// ISO 639-2 code, "eng" when unset.
    pub language: Option<String>,
    pub description: String,
    pub lyrics: String,
}

/// Comment (COMM).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentValue {
    /// ISO 639-2 code, "eng" when unset.
    pub language: Option<String>,
    pub description: String,
    pub text: String,
}

/// User-defined text (TXXX).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserTextValue {
    pub description: String,
    pub value: String,
}

/// Private data (PRIV), tagged with an owner identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrivateValue {
    pub id: String,
    pub data: Vec<u8>,
}

/// Synchronised lyrics (SYLT).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SynchronisedLyricsValue {
    /// 0 = other, 1 = lyrics, 2 = text transcription, 3 = movement, 4 = events,
    /// 5 = chord, 6 = trivia.
    pub content_type: u8,
    /// 1 = MPEG frames, 2 = milliseconds.
    pub timestamp_format: u8,
    /// ISO 639-2 code, "XXX" when unset.
    pub language: Option<String>,
    pub description: Option<String>,
    /// Lyric lines paired with their timestamps.
    pub text: Vec<(String, u32)>,
}

/// Attached picture (APIC).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PictureValue {
    /// Picture type code, 0..=20 (3 is the front cover).
    pub picture_type: u8,
    pub data: Vec<u8>,
    pub description: String,
    /// Write the description as UTF-16. Ignored when the description is empty.
    pub use_unicode_encoding: bool,
}

/// A value handed to [`TagWriter::set_frame`](crate::TagWriter::set_frame).
///
/// Which variant a frame accepts depends on its [`FrameKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameValue {
    Integer(u32),
    Text(String),
    TextList(Vec<String>),
    Lyrics(LyricsValue),
    Comment(CommentValue),
    UserText(UserTextValue),
    Private(PrivateValue),
    InvolvedPeople(Vec<(String, String)>),
    SynchronisedLyrics(SynchronisedLyricsValue),
    Picture(PictureValue),
}

impl FrameValue {
    /// Text form of scalar values, used by the string frames.
    fn into_text(self) -> Option<String> {
        match self {
            FrameValue::Text(text) => Some(text),
            FrameValue::Integer(n) => Some(itoa::Buffer::new().format(n).to_string()),
            _ => None,
        }
    }
}

impl From<u32> for FrameValue {
    fn from(n: u32) -> Self {
        FrameValue::Integer(n)
    }
}

impl From<&str> for FrameValue {
    fn from(s: &str) -> Self {
        FrameValue::Text(s.to_string())
    }
}

impl From<String> for FrameValue {
    fn from(s: String) -> Self {
        FrameValue::Text(s)
    }
}

impl From<Vec<String>> for FrameValue {
    fn from(items: Vec<String>) -> Self {
        FrameValue::TextList(items)
    }
}

impl From<Vec<&str>> for FrameValue {
    fn from(items: Vec<&str>) -> Self {
        FrameValue::TextList(items.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FrameValue {
    fn from(items: [&str; N]) -> Self {
        FrameValue::TextList(items.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<(String, String)>> for FrameValue {
    fn from(people: Vec<(String, String)>) -> Self {
        FrameValue::InvolvedPeople(people)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for FrameValue {
    fn from(people: [(&str, &str); N]) -> Self {
        FrameValue::InvolvedPeople(
            people
                .iter()
                .map(|(role, name)| (role.to_string(), name.to_string()))
                .collect(),
        )
    }
}

macro_rules! frame_value_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for FrameValue {
                fn from(value: $ty) -> Self {
                    FrameValue::$variant(value)
                }
            }
        )+
    };
}

frame_value_from! {
    LyricsValue => Lyrics,
    CommentValue => Comment,
    UserTextValue => UserText,
    PrivateValue => Private,
    SynchronisedLyricsValue => SynchronisedLyrics,
    PictureValue => Picture,
}

/// Normalized frame content, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameBody {
    Text {
        encoding: Encoding,
        text: String,
    },
    Url(String),
    LanguageText {
        language: [u8; 3],
        description: String,
        text: String,
    },
    UserText {
        description: String,
        value: String,
    },
    Private {
        owner: String,
        data: Vec<u8>,
    },
    InvolvedPeople(Vec<(String, String)>),
    SynchronisedLyrics {
        language: [u8; 3],
        timestamp_format: u8,
        content_type: u8,
        description: String,
        lines: Vec<(String, u32)>,
    },
    Picture {
        encoding: Encoding,
        mime: MimeType,
        picture_type: PictureType,
        description: String,
        data: Vec<u8>,
    },
}

impl FrameBody {
    /// Serialized size including the frame header.
    pub fn size(&self) -> usize {
        match self {
            FrameBody::Text {
                encoding: Encoding::Latin1,
                text,
            } => sizes::numeric_frame_size(text_len(text)),
            FrameBody::Text {
                encoding: Encoding::Utf16,
                text,
            } => sizes::string_frame_size(text_len(text)),
            FrameBody::Url(url) => sizes::url_link_frame_size(text_len(url)),
            FrameBody::LanguageText {
                description, text, ..
            } => sizes::language_text_frame_size(text_len(description), text_len(text)),
            FrameBody::UserText { description, value } => {
                sizes::user_string_frame_size(text_len(description), text_len(value))
            }
            FrameBody::Private { owner, data } => {
                sizes::private_frame_size(text_len(owner), data.len())
            }
            FrameBody::InvolvedPeople(people) => sizes::involved_people_frame_size(
                people
                    .iter()
                    .flat_map(|(role, name)| [text_len(role), text_len(name)]),
            ),
            FrameBody::SynchronisedLyrics {
                description, lines, ..
            } => sizes::synchronised_lyrics_frame_size(
                lines.iter().map(|(line, _)| text_len(line)),
                text_len(description),
            ),
            FrameBody::Picture {
                encoding,
                mime,
                description,
                data,
                ..
            } => sizes::picture_frame_size(
                data.len(),
                mime.as_str().len(),
                text_len(description),
                *encoding == Encoding::Utf16,
            ),
        }
    }

    /// Append the frame body (everything after the 10 byte header).
    pub fn write_to(&self, out: &mut Vec<u8>) {
        match self {
            FrameBody::Text { encoding, text } => {
                out.push(*encoding as u8);
                specs::write_text(out, text, *encoding);
            }
            FrameBody::Url(url) => specs::write_text(out, url, Encoding::Latin1),
            FrameBody::LanguageText {
                language,
                description,
                text,
            } => {
                out.push(Encoding::Utf16 as u8);
                out.extend_from_slice(language);
                specs::write_text(out, description, Encoding::Utf16);
                specs::write_terminator(out, Encoding::Utf16);
                specs::write_text(out, text, Encoding::Utf16);
            }
            FrameBody::UserText { description, value } => {
                out.push(Encoding::Utf16 as u8);
                specs::write_text(out, description, Encoding::Utf16);
                specs::write_terminator(out, Encoding::Utf16);
                specs::write_text(out, value, Encoding::Utf16);
            }
            FrameBody::Private { owner, data } => {
                specs::write_text(out, owner, Encoding::Latin1);
                specs::write_terminator(out, Encoding::Latin1);
                out.extend_from_slice(data);
            }
            FrameBody::InvolvedPeople(people) => {
                out.push(Encoding::Utf16 as u8);
                for (role, name) in people {
                    for text in [role, name] {
                        specs::write_text(out, text, Encoding::Utf16);
                        specs::write_terminator(out, Encoding::Utf16);
                    }
                }
            }
            FrameBody::SynchronisedLyrics {
                language,
                timestamp_format,
                content_type,
                description,
                lines,
            } => {
                out.push(Encoding::Utf16 as u8);
                out.extend_from_slice(language);
                out.push(*timestamp_format);
                out.push(*content_type);
                specs::write_text(out, description, Encoding::Utf16);
                specs::write_terminator(out, Encoding::Utf16);
                for (line, timestamp) in lines {
                    specs::write_text(out, line, Encoding::Utf16);
                    specs::write_terminator(out, Encoding::Utf16);
                    out.extend_from_slice(&u32_to_bytes(*timestamp));
                }
            }
            FrameBody::Picture {
                encoding,
                mime,
                picture_type,
                description,
                data,
            } => {
                out.push(*encoding as u8);
                specs::write_text(out, mime.as_str(), Encoding::Latin1);
                specs::write_terminator(out, Encoding::Latin1);
                out.push(u8::from(*picture_type));
                specs::write_text(out, description, *encoding);
                specs::write_terminator(out, *encoding);
                out.extend_from_slice(data);
            }
        }
    }
}

/// A validated frame queued for writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    id: FrameId,
    body: FrameBody,
    size: usize,
}

impl Frame {
    /// Validate `value` against the shape `id` expects.
    pub fn new(id: FrameId, value: FrameValue) -> Result<Self> {
        let body = build_body(id, value)?;
        let size = body.size();
        Ok(Frame { id, body, size })
    }

    pub fn id(&self) -> FrameId {
        self.id
    }

    pub fn body(&self) -> &FrameBody {
        &self.body
    }

    /// Serialized size, header included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Append the header and body to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.id.as_str().as_bytes());
        out.extend_from_slice(&u32_to_bytes((self.size - HEADER_SIZE) as u32));
        out.extend_from_slice(&[0, 0]); // flags
        self.body.write_to(out);
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.size);
        self.write_to(&mut out);
        out
    }
}

fn build_body(id: FrameId, value: FrameValue) -> Result<FrameBody> {
    let name = id.as_str();

    let body = match id.kind() {
        FrameKind::TextList { delimiter } => match value {
            FrameValue::TextList(items) => FrameBody::Text {
                encoding: Encoding::Utf16,
                text: items.join(delimiter),
            },
            _ => {
                return Err(WriterError::shape(
                    name,
                    "frame value should be an array of strings",
                ))
            }
        },
        FrameKind::UnicodeText => {
            let text = value
                .into_text()
                .ok_or_else(|| WriterError::shape(name, "frame value should be a string"))?;
            if id == FrameId::Tkey && !specs::is_valid_key(&text) {
                return Err(WriterError::shape(
                    name,
                    format!("frame value {:?} is not a musical key (e.g. C#, Bbm or o)", text),
                ));
            }
            FrameBody::Text {
                encoding: Encoding::Utf16,
                text,
            }
        }
        FrameKind::Latin1Text => FrameBody::Text {
            encoding: Encoding::Latin1,
            text: value
                .into_text()
                .ok_or_else(|| WriterError::shape(name, "frame value should be a string"))?,
        },
        FrameKind::Integer => {
            let n = match value {
                FrameValue::Integer(n) => n,
                FrameValue::Text(text) => text.trim().parse::<u32>().map_err(|_| {
                    WriterError::shape(name, format!("frame value {:?} is not an integer", text))
                })?,
                _ => return Err(WriterError::shape(name, "frame value should be an integer")),
            };
            FrameBody::Text {
                encoding: Encoding::Latin1,
                text: itoa::Buffer::new().format(n).to_string(),
            }
        }
        FrameKind::UrlLink => match value {
            FrameValue::Text(url) => FrameBody::Url(url),
            _ => return Err(WriterError::shape(name, "frame value should be a URL string")),
        },
        FrameKind::Lyrics => match value {
            FrameValue::Lyrics(v) => FrameBody::LanguageText {
                language: specs::language_code(v.language.as_deref().unwrap_or("eng"))?,
                description: v.description,
                text: v.lyrics,
            },
            _ => {
                return Err(WriterError::shape(
                    name,
                    "frame value should be an object with keys description and lyrics",
                ))
            }
        },
        FrameKind::Comment => match value {
            FrameValue::Comment(v) => FrameBody::LanguageText {
                language: specs::language_code(v.language.as_deref().unwrap_or("eng"))?,
                description: v.description,
                text: v.text,
            },
            _ => {
                return Err(WriterError::shape(
                    name,
                    "frame value should be an object with keys description and text",
                ))
            }
        },
        FrameKind::UserText => match value {
            FrameValue::UserText(v) => FrameBody::UserText {
                description: v.description,
                value: v.value,
            },
            _ => {
                return Err(WriterError::shape(
                    name,
                    "frame value should be an object with keys description and value",
                ))
            }
        },
        FrameKind::Private => match value {
            FrameValue::Private(v) => FrameBody::Private {
                owner: v.id,
                data: v.data,
            },
            _ => {
                return Err(WriterError::shape(
                    name,
                    "frame value should be an object with keys id and data",
                ))
            }
        },
        FrameKind::InvolvedPeople => match value {
            FrameValue::InvolvedPeople(people) => FrameBody::InvolvedPeople(people),
            _ => {
                return Err(WriterError::shape(
                    name,
                    "frame value should be an array of pairs",
                ))
            }
        },
        FrameKind::SynchronisedLyrics => match value {
            FrameValue::SynchronisedLyrics(v) => synchronised_lyrics_body(name, v)?,
            _ => {
                return Err(WriterError::shape(
                    name,
                    "frame value should be an object with keys type, text and timestampFormat",
                ))
            }
        },
        FrameKind::Picture => match value {
            FrameValue::Picture(v) => picture_body(name, v)?,
            _ => {
                return Err(WriterError::shape(
                    name,
                    "frame value should be an object with keys type, data and description",
                ))
            }
        },
    };

    Ok(body)
}

fn synchronised_lyrics_body(name: &'static str, v: SynchronisedLyricsValue) -> Result<FrameBody> {
    if v.text.is_empty() {
        return Err(WriterError::shape(
            name,
            "frame text value should be an array of pairs",
        ));
    }
    if !specs::SYLT_CONTENT_TYPES.contains(&v.content_type) {
        return Err(WriterError::shape(name, "Incorrect SYLT frame content type"));
    }
    if !specs::SYLT_TIMESTAMP_FORMATS.contains(&v.timestamp_format) {
        return Err(WriterError::shape(name, "Incorrect SYLT frame time stamp format"));
    }

    Ok(FrameBody::SynchronisedLyrics {
        language: specs::language_code(v.language.as_deref().unwrap_or("XXX"))?,
        timestamp_format: v.timestamp_format,
        content_type: v.content_type,
        description: v.description.unwrap_or_default(),
        lines: v.text,
    })
}

fn picture_body(name: &'static str, v: PictureValue) -> Result<FrameBody> {
    let picture_type = PictureType::from_byte(v.picture_type)
        .ok_or_else(|| WriterError::shape(name, "Incorrect APIC frame picture type"))?;
    let mime =
        sniff_mime(&v.data).ok_or_else(|| WriterError::shape(name, "Unknown picture MIME type"))?;

    // An empty description is always written as Latin1
    let encoding = if v.use_unicode_encoding && !v.description.is_empty() {
        Encoding::Utf16
    } else {
        Encoding::Latin1
    };

    Ok(FrameBody::Picture {
        encoding,
        mime,
        picture_type,
        description: v.description,
        data: v.data,
    })
}
