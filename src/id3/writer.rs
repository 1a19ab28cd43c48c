use std::io::Read;
use std::path::Path;

use crate::common::error::Result;
use crate::common::util;
use crate::config::WriteOptions;
use crate::id3::frames::{Frame, FrameId, FrameValue};
use crate::id3::header::{leading_tag_len, ID3Header, HEADER_SIZE};

/// Largest tag size the 28-bit header field can describe.
const MAX_TAG_SIZE: usize = (1 << 28) - 1;

/// Borrowed view of the tagged audio, labelled with its media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioBlob<'a> {
    data: &'a [u8],
}

impl<'a> AudioBlob<'a> {
    pub fn mime_type(&self) -> &'static str {
        "audio/mpeg"
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Builds an ID3v2.3 tag in front of an in-memory MP3.
///
/// Frames are queued with [`TagWriter::set_frame`] and only serialized by
/// [`TagWriter::add_tag`], which replaces any tag already at the start of the buffer.
///
/// ```rust
/// use id3_writer::TagWriter;
///
/// # fn main() -> id3_writer::Result<()> {
/// let mut writer = TagWriter::new(vec![0xFF, 0xFB, 0x90, 0x00]);
/// writer
///     .set_frame("TIT2", "Home")?
///     .set_frame("TPE1", ["Eminem", "50 Cent"])?
///     .set_frame("TYER", 2004_u32)?;
///
/// let tagged = writer.add_tag();
/// assert_eq!(&tagged[..3], b"ID3");
/// # Ok(()) }
/// ```
#[derive(Debug, Clone)]
pub struct TagWriter {
    buffer: Vec<u8>,
    options: WriteOptions,
    frames: Vec<Frame>,
}

impl TagWriter {
    /// Wrap an MP3 held in memory, using the default [`WriteOptions`].
    pub fn new(buffer: impl Into<Vec<u8>>) -> Self {
        Self::with_options(buffer, WriteOptions::default())
    }

    pub fn with_options(buffer: impl Into<Vec<u8>>, options: WriteOptions) -> Self {
        TagWriter {
            buffer: buffer.into(),
            options,
            frames: Vec::with_capacity(16),
        }
    }

    /// Read the whole MP3 from `reader`.
    ///
    /// # Errors
    ///
    /// [`WriterError::Construction`](crate::WriterError::Construction) if reading fails.
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Self::new(util::read_source(reader)?))
    }

    /// Load the MP3 at `path`.
    ///
    /// # Errors
    ///
    /// [`WriterError::Construction`](crate::WriterError::Construction) if the file can't be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(util::read_source_path(path.as_ref())?))
    }

    pub fn padding(&self) -> u32 {
        self.options.padding_size()
    }

    pub fn set_padding(&mut self, padding: u32) -> &mut Self {
        self.options = self.options.padding(padding);
        self
    }

    pub fn options(&self) -> WriteOptions {
        self.options
    }

    /// Frames queued so far, in write order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Queue a frame by its 4-character identifier.
    ///
    /// The same identifier may be set more than once; each call appends a new frame.
    ///
    /// # Errors
    ///
    /// * [`WriterError::UnsupportedFrame`](crate::WriterError::UnsupportedFrame) for unknown ids
    /// * [`WriterError::FrameValueShape`](crate::WriterError::FrameValueShape) when `value`
    ///   doesn't fit the frame
    /// * [`WriterError::LanguageCode`](crate::WriterError::LanguageCode) for bad ISO 639-2 codes
    ///
    /// Nothing is queued on error.
    pub fn set_frame(&mut self, id: &str, value: impl Into<FrameValue>) -> Result<&mut Self> {
        let id = id.parse::<FrameId>()?;
        self.push_frame(id, value)
    }

    /// Typed variant of [`TagWriter::set_frame`].
    pub fn push_frame(&mut self, id: FrameId, value: impl Into<FrameValue>) -> Result<&mut Self> {
        let frame = Frame::new(id, value.into())?;
        log::trace!("Queued {} frame ({} bytes)", id, frame.size());
        self.frames.push(frame);
        Ok(self)
    }

    /// Strip an ID3v2.2-2.4 tag from the start of the buffer, if there is one.
    pub fn remove_tag(&mut self) {
        let tag_len = leading_tag_len(&self.buffer);
        if tag_len == 0 {
            return;
        }

        log::debug!("Removing existing ID3v2 tag ({} bytes)", tag_len);
        self.buffer.drain(..tag_len);
    }

    /// Total size of the tag [`TagWriter::add_tag`] would write: header, frames and padding.
    pub fn tag_size(&self) -> usize {
        let frames: usize = self.frames.iter().map(Frame::size).sum();
        HEADER_SIZE + frames + self.padding() as usize
    }

    /// Write the queued frames in front of the audio.
    ///
    /// Any existing tag is removed first, so calling this again re-tags the result
    /// instead of stacking tags. The new buffer is kept and returned.
    pub fn add_tag(&mut self) -> &[u8] {
        self.remove_tag();

        let tag_size = self.tag_size();
        if tag_size - HEADER_SIZE > MAX_TAG_SIZE {
            log::warn!(
                "Tag size {} does not fit in 28 bits, the header size will wrap",
                tag_size - HEADER_SIZE
            );
        }

        let audio = std::mem::take(&mut self.buffer);
        let mut out = Vec::with_capacity(audio.len() + tag_size);

        let header = ID3Header::for_write((tag_size - HEADER_SIZE) as u32);
        out.extend_from_slice(&header.to_bytes());

        for frame in &self.frames {
            log::trace!("Writing {} frame at offset {}", frame.id(), out.len());
            frame.write_to(&mut out);
        }

        out.resize(out.len() + self.padding() as usize, 0);
        out.extend_from_slice(&audio);

        log::debug!(
            "Wrote ID3v2.3 tag: {} frames, {} bytes (padding {})",
            self.frames.len(),
            tag_size,
            self.padding()
        );

        self.buffer = out;
        &self.buffer
    }

    /// The current buffer: the source, or the tagged output after [`TagWriter::add_tag`].
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    pub fn blob(&self) -> AudioBlob<'_> {
        AudioBlob { data: &self.buffer }
    }

    /// Write the current buffer to `path`, replacing its contents.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        util::write_all_to_path(path.as_ref(), &self.buffer)
    }
}
