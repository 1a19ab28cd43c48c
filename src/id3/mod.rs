pub mod frames;
pub mod header;
pub mod mime;
pub mod sizes;
pub mod specs;
pub mod writer;

pub use frames::{
    CommentValue, Frame, FrameBody, FrameId, FrameKind, FrameValue, LyricsValue, PictureValue,
    PrivateValue, SynchronisedLyricsValue, UserTextValue,
};
pub use header::{synchsafe_to_u28, u28_to_synchsafe, u32_to_bytes};
pub use mime::{sniff_mime, MimeType};
pub use specs::{encode_latin1, encode_utf16le, PictureType};
pub use writer::{AudioBlob, TagWriter};
