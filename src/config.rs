/// Options controlling how a tag is laid out when written
///
/// Intended to be built once and handed to [`TagWriter::with_options`](crate::TagWriter::with_options).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct WriteOptions {
    pub(crate) padding: u32,
}

impl WriteOptions {
    /// Default padding size in bytes
    pub const DEFAULT_PADDING: u32 = 4096;

    /// Creates a new `WriteOptions`, alias for `Default` implementation
    ///
    /// # Examples
    ///
    /// ```rust
    /// use id3_writer::config::WriteOptions;
    ///
    /// let options = WriteOptions::new();
    /// assert_eq!(options.padding_size(), WriteOptions::DEFAULT_PADDING);
    /// ```
    pub const fn new() -> Self {
        Self {
            padding: Self::DEFAULT_PADDING,
        }
    }

    /// Set the number of zero bytes reserved between the frames and the audio payload
    ///
    /// Padding lets later edits grow the tag in place without rewriting the whole file.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use id3_writer::config::WriteOptions;
    ///
    /// // No padding at all, the audio starts right after the last frame
    /// let options = WriteOptions::new().padding(0);
    /// assert_eq!(options.padding_size(), 0);
    /// ```
    pub const fn padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// The configured padding size in bytes
    pub const fn padding_size(&self) -> u32 {
        self.padding
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self::new()
    }
}
