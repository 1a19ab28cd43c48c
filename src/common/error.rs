use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriterError {
    #[error("could not read source audio: {0}")]
    Construction(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported frame {0}")]
    UnsupportedFrame(String),

    #[error("{id} {message}")]
    FrameValueShape { id: &'static str, message: String },

    #[error("Language must be coded following the ISO 639-2 standards, got {0:?}")]
    LanguageCode(String),

    #[error("ID3 no header found")]
    NoHeader,

    #[error("ID3 unsupported version: {0}")]
    UnsupportedVersion(String),
}

impl WriterError {
    /// Shorthand for a [`WriterError::FrameValueShape`] naming the offending frame.
    pub(crate) fn shape(id: &'static str, message: impl Into<String>) -> Self {
        WriterError::FrameValueShape {
            id,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WriterError>;
