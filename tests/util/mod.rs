#![allow(dead_code)]

use id3_writer::id3::{encode_latin1, encode_utf16le, u28_to_synchsafe, u32_to_bytes};
use id3_writer::{FrameValue, TagWriter, WriteOptions};

pub const ID3_HEADER: [u8; 6] = [b'I', b'D', b'3', 3, 0, 0];
pub const BOM: [u8; 2] = [0xFF, 0xFE];

/// Writer over an empty buffer with no padding, so the output is only the tag.
pub fn writer() -> TagWriter {
    TagWriter::with_options(Vec::new(), WriteOptions::new().padding(0))
}

/// Tag a single frame into an empty, unpadded buffer.
pub fn write_single(id: &str, value: impl Into<FrameValue>) -> Vec<u8> {
    let mut writer = writer();
    writer.set_frame(id, value).unwrap();
    writer.add_tag().to_vec()
}

/// Tag header followed by one frame header, as laid out by the writer.
pub fn headers(tag_size: u32, id: &str, frame_size: u32) -> Vec<u8> {
    let mut out = ID3_HEADER.to_vec();
    out.extend_from_slice(&u28_to_synchsafe(tag_size));
    out.extend_from_slice(&latin1(id));
    out.extend_from_slice(&u32_to_bytes(frame_size));
    out.extend_from_slice(&[0, 0]);
    out
}

pub fn latin1(text: &str) -> Vec<u8> {
    encode_latin1(text)
}

pub fn utf16(text: &str) -> Vec<u8> {
    encode_utf16le(text)
}
