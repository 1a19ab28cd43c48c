//! Serialized sizes of every frame category.
//!
//! All lengths passed in are UTF-16 code-unit counts (see [`specs::text_len`](super::specs::text_len))
//! or raw byte counts, and every result includes the 10 byte frame header.

use crate::id3::header::HEADER_SIZE;

const ENCODING_SIZE: usize = 1;
const BOM_SIZE: usize = 2;
const LANGUAGE_SIZE: usize = 3;
const UTF16_SEPARATOR_SIZE: usize = 2;
const LATIN1_SEPARATOR_SIZE: usize = 1;
const TIMESTAMP_SIZE: usize = 4;

/// Integer frames and other single-byte text: encoding byte + Latin1 text.
pub fn numeric_frame_size(len: usize) -> usize {
    HEADER_SIZE + ENCODING_SIZE + len
}

/// UTF-16 text frames: encoding byte + BOM + text.
pub fn string_frame_size(len: usize) -> usize {
    HEADER_SIZE + ENCODING_SIZE + BOM_SIZE + len * 2
}

/// URL link frames carry the bare Latin1 URL, no encoding byte.
pub fn url_link_frame_size(len: usize) -> usize {
    HEADER_SIZE + len
}

/// USLT and COMM share a layout: language, description, text.
pub fn language_text_frame_size(description_len: usize, text_len: usize) -> usize {
    HEADER_SIZE
        + ENCODING_SIZE
        + LANGUAGE_SIZE
        + BOM_SIZE
        + description_len * 2
        + UTF16_SEPARATOR_SIZE
        + BOM_SIZE
        + text_len * 2
}

pub fn lyrics_frame_size(description_len: usize, lyrics_len: usize) -> usize {
    language_text_frame_size(description_len, lyrics_len)
}

pub fn comment_frame_size(description_len: usize, text_len: usize) -> usize {
    language_text_frame_size(description_len, text_len)
}

pub fn user_string_frame_size(description_len: usize, value_len: usize) -> usize {
    HEADER_SIZE
        + ENCODING_SIZE
        + BOM_SIZE
        + description_len * 2
        + UTF16_SEPARATOR_SIZE
        + BOM_SIZE
        + value_len * 2
}

pub fn private_frame_size(owner_len: usize, data_len: usize) -> usize {
    HEADER_SIZE + owner_len + LATIN1_SEPARATOR_SIZE + data_len
}

pub fn picture_frame_size(
    picture_len: usize,
    mime_len: usize,
    description_len: usize,
    use_unicode_encoding: bool,
) -> usize {
    const PICTURE_TYPE_SIZE: usize = 1;

    let encoded_description = if use_unicode_encoding {
        BOM_SIZE + (description_len + LATIN1_SEPARATOR_SIZE) * 2
    } else {
        description_len + LATIN1_SEPARATOR_SIZE
    };

    HEADER_SIZE
        + ENCODING_SIZE
        + mime_len
        + LATIN1_SEPARATOR_SIZE
        + PICTURE_TYPE_SIZE
        + encoded_description
        + picture_len
}

/// `line_lens` holds the text length of every lyric line.
pub fn synchronised_lyrics_frame_size(
    line_lens: impl IntoIterator<Item = usize>,
    description_len: usize,
) -> usize {
    const TIMESTAMP_FORMAT_SIZE: usize = 1;
    const CONTENT_TYPE_SIZE: usize = 1;

    let lines: usize = line_lens
        .into_iter()
        .map(|len| BOM_SIZE + len * 2 + UTF16_SEPARATOR_SIZE + TIMESTAMP_SIZE)
        .sum();

    HEADER_SIZE
        + ENCODING_SIZE
        + LANGUAGE_SIZE
        + TIMESTAMP_FORMAT_SIZE
        + CONTENT_TYPE_SIZE
        + BOM_SIZE
        + description_len * 2
        + UTF16_SEPARATOR_SIZE
        + lines
}

/// `name_lens` holds the length of every involvement and every name, flattened.
pub fn involved_people_frame_size(name_lens: impl IntoIterator<Item = usize>) -> usize {
    let names: usize = name_lens
        .into_iter()
        .map(|len| BOM_SIZE + len * 2 + UTF16_SEPARATOR_SIZE)
        .sum();

    HEADER_SIZE + ENCODING_SIZE + names
}
