use byteorder::{BigEndian, ByteOrder};

use crate::common::error::{Result, WriterError};

/// Size of the ID3v2 tag header, and of every ID3v2.3 frame header.
pub const HEADER_SIZE: usize = 10;

/// Major version written by this crate (ID3v2.3).
pub const WRITE_VERSION: u8 = 3;

const SEVEN_BIT_MASK: u32 = 0x7F;

/// Split a `u32` into four big-endian bytes.
pub fn u32_to_bytes(value: u32) -> [u8; 4] {
    let mut buf = [0u8; 4];
    BigEndian::write_u32(&mut buf, value);
    buf
}

/// Encode the low 28 bits of `value` as a synchsafe integer.
///
/// Each output byte carries 7 bits, most significant group first, so no byte ever
/// reaches 0x80. Bits above 28 are discarded.
pub fn u28_to_synchsafe(value: u32) -> [u8; 4] {
    [
        ((value >> 21) & SEVEN_BIT_MASK) as u8,
        ((value >> 14) & SEVEN_BIT_MASK) as u8,
        ((value >> 7) & SEVEN_BIT_MASK) as u8,
        (value & SEVEN_BIT_MASK) as u8,
    ]
}

/// Decode a synchsafe integer back into its 28-bit value.
pub fn synchsafe_to_u28(bytes: [u8; 4]) -> u32 {
    bytes
        .iter()
        .fold(0u32, |acc, &b| (acc << 7) | (b as u32 & SEVEN_BIT_MASK))
}

/// Parsed ID3v2 tag header (10 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ID3Header {
    pub version: (u8, u8), // (major, revision)
    pub flags: u8,
    pub size: u32, // Tag size excluding the 10 byte header
}

impl ID3Header {
    /// Parse an ID3v2 header from the start of `data`.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE || &data[0..3] != b"ID3" {
            return Err(WriterError::NoHeader);
        }

        let major = data[3];
        let revision = data[4];
        if !(2..=4).contains(&major) {
            return Err(WriterError::UnsupportedVersion(format!(
                "ID3v2.{}.{}",
                major, revision
            )));
        }

        Ok(ID3Header {
            version: (major, revision),
            flags: data[5],
            size: synchsafe_to_u28([data[6], data[7], data[8], data[9]]),
        })
    }

    /// Header for a tag this crate writes: v2.3.0, no flags.
    pub fn for_write(size: u32) -> Self {
        ID3Header {
            version: (WRITE_VERSION, 0),
            flags: 0,
            size,
        }
    }

    /// Tag size including the header itself.
    pub fn full_size(&self) -> usize {
        HEADER_SIZE + self.size as usize
    }

    /// Serialize back into the 10 byte on-disk form.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let size = u28_to_synchsafe(self.size);
        [
            b'I',
            b'D',
            b'3',
            self.version.0,
            self.version.1,
            self.flags,
            size[0],
            size[1],
            size[2],
            size[3],
        ]
    }
}

/// Number of leading bytes occupied by an ID3v2 tag, or 0 when `data` does not start with one.
///
/// A declared size larger than the buffer is clamped to the buffer length.
pub fn leading_tag_len(data: &[u8]) -> usize {
    match ID3Header::parse(data) {
        Ok(header) => header.full_size().min(data.len()),
        Err(_) => 0,
    }
}
