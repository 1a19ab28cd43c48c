//! Write ID3v2.3 tags into MP3 files held in memory.
//!
//! Any ID3v2 tag already at the start of the buffer is dropped, the queued frames are laid
//! out in insertion order, and the result is `tag + padding + audio`.

pub mod common;
pub mod config;
pub mod id3;

pub use common::error::{Result, WriterError};
pub use config::WriteOptions;
pub use id3::{FrameId, FrameValue, TagWriter};
