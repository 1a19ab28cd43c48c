mod util;

use id3_writer::id3::{
    CommentValue, LyricsValue, PictureValue, PrivateValue, SynchronisedLyricsValue, UserTextValue,
};
use id3_writer::WriterError;
use util::{headers, latin1, utf16, write_single, BOM};

const IMAGE_CONTENT: [u8; 6] = [4, 8, 15, 16, 23, 42];

const URL_LINK_FRAMES: [&str; 8] = [
    "WCOM", "WCOP", "WOAF", "WOAR", "WOAS", "WORS", "WPAY", "WPUB",
];

const TWO_BYTE_ENCODED_FRAMES: [&str; 15] = [
    "TLAN", "TIT1", "TIT2", "TIT3", "TALB", "TPE2", "TPE3", "TPE4", "TRCK", "TPOS", "TPUB",
    "TMED", "TSRC", "TCOP", "TEXT",
];

#[test_log::test]
fn url_link_frames() {
    for id in URL_LINK_FRAMES {
        let mut expected = headers(28, id, 18);
        expected.extend(latin1("https://google.com"));

        assert_eq!(write_single(id, "https://google.com"), expected, "{id}");
    }
}

#[test_log::test]
fn one_byte_encoded_string() {
    let mut expected = headers(31, "TDAT", 21);
    expected.push(0);
    expected.extend(latin1("Lyricist/Text writer"));

    assert_eq!(write_single("TDAT", "Lyricist/Text writer"), expected);
}

#[test_log::test]
fn tdat_keeps_leading_zero() {
    let mut expected = headers(15, "TDAT", 5);
    expected.push(0);
    expected.extend(latin1("0212"));

    assert_eq!(write_single("TDAT", "0212"), expected);
}

#[test_log::test]
fn two_byte_encoded_strings() {
    for id in TWO_BYTE_ENCODED_FRAMES {
        let mut expected = headers(53, id, 43);
        expected.push(1);
        expected.extend(BOM);
        expected.extend(utf16("Lyricist/Text writer"));

        assert_eq!(write_single(id, "Lyricist/Text writer"), expected, "{id}");
    }
}

#[test_log::test]
fn musical_key() {
    let mut expected = headers(17, "TKEY", 7);
    expected.push(1);
    expected.extend(BOM);
    expected.extend(utf16("C#"));

    assert_eq!(write_single("TKEY", "C#"), expected);
}

#[test_log::test]
fn integer_frames() {
    for id in ["TLEN", "TYER", "TBPM"] {
        let mut expected = headers(15, id, 5);
        expected.push(0);
        expected.extend(latin1("2023"));

        assert_eq!(write_single(id, 2023_u32), expected, "{id}");
    }
}

#[test_log::test]
fn duration_body_is_eight_bytes() {
    let mut expected = headers(18, "TLEN", 8);
    expected.push(0);
    expected.extend(latin1("7200000"));

    assert_eq!(write_single("TLEN", 7_200_000_u32), expected);
}

#[test_log::test]
fn arrays_of_strings() {
    for (id, delimiter) in [("TPE1", "/"), ("TCOM", "/"), ("TCON", ";")] {
        let mut expected = headers(41, id, 31);
        expected.push(1);
        expected.extend(BOM);
        expected.extend(utf16(&format!("Eminem{delimiter}50 Cent")));

        assert_eq!(write_single(id, ["Eminem", "50 Cent"]), expected, "{id}");
    }
}

#[test_log::test]
fn array_frame_rejects_plain_string() {
    let err = util::writer().set_frame("TPE1", "hey").unwrap_err();
    assert!(err
        .to_string()
        .contains("TPE1 frame value should be an array of strings"));
}

#[test_log::test]
fn comment() {
    let value = CommentValue {
        language: None,
        description: String::from("advert"),
        text: String::from("free hugs"),
    };

    let mut expected = headers(50, "COMM", 40);
    expected.push(1);
    expected.extend(latin1("eng"));
    expected.extend(BOM);
    expected.extend(utf16("advert"));
    expected.extend([0, 0]);
    expected.extend(BOM);
    expected.extend(utf16("free hugs"));

    assert_eq!(write_single("COMM", value), expected);
}

#[test_log::test]
fn comment_with_language() {
    let value = CommentValue {
        language: Some(String::from("jpn")),
        description: String::from("この世界"),
        text: String::from("俺の名前"),
    };

    let mut expected = headers(36, "COMM", 26);
    expected.push(1);
    expected.extend(latin1("jpn"));
    expected.extend(BOM);
    expected.extend(utf16("この世界"));
    expected.extend([0, 0]);
    expected.extend(BOM);
    expected.extend(utf16("俺の名前"));

    assert_eq!(write_single("COMM", value), expected);
}

#[test_log::test]
fn unsynchronised_lyrics() {
    for language in [None, Some("rus")] {
        let value = LyricsValue {
            language: language.map(String::from),
            description: String::from("Ярл"),
            lyrics: String::from("Лирика"),
        };

        let mut expected = headers(38, "USLT", 28);
        expected.push(1);
        expected.extend(latin1(language.unwrap_or("eng")));
        expected.extend(BOM);
        expected.extend(utf16("Ярл"));
        expected.extend([0, 0]);
        expected.extend(BOM);
        expected.extend(utf16("Лирика"));

        assert_eq!(write_single("USLT", value), expected);
    }
}

#[test_log::test]
fn bad_language_is_rejected() {
    let value = LyricsValue {
        language: Some(String::from("12")),
        ..LyricsValue::default()
    };
    let err = util::writer().set_frame("USLT", value).unwrap_err();
    assert!(matches!(err, WriterError::LanguageCode(ref code) if code == "12"));
}

#[test_log::test]
fn user_text() {
    let value = UserTextValue {
        description: String::from("foo"),
        value: String::from("bar"),
    };

    let mut expected = headers(29, "TXXX", 19);
    expected.push(1);
    expected.extend(BOM);
    expected.extend(utf16("foo"));
    expected.extend([0, 0]);
    expected.extend(BOM);
    expected.extend(utf16("bar"));

    assert_eq!(write_single("TXXX", value), expected);
}

#[test_log::test]
fn user_text_rejects_plain_string() {
    let err = util::writer().set_frame("TXXX", "foobar").unwrap_err();
    assert!(err
        .to_string()
        .contains("TXXX frame value should be an object with keys description and value"));
}

#[test_log::test]
fn private_frame() {
    let data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
    let value = PrivateValue {
        id: String::from("site.com"),
        data: data.clone(),
    };

    let mut expected = headers(28, "PRIV", 18);
    expected.extend(latin1("site.com"));
    expected.push(0);
    expected.extend(data);

    assert_eq!(write_single("PRIV", value), expected);
}

#[test_log::test]
fn involved_people() {
    let people = [
        ("author", "Thomas Bangalter"),
        ("author", "Guy-Manuel de Homem-Christo"),
        ("mixer", "DJ Falcon"),
    ];

    let mut expected = headers(173, "IPLS", 163);
    expected.push(1);
    for (role, name) in people {
        for text in [role, name] {
            expected.extend(BOM);
            expected.extend(utf16(text));
            expected.extend([0, 0]);
        }
    }

    assert_eq!(write_single("IPLS", people), expected);
}

#[test_log::test]
fn synchronised_lyrics() {
    let lines = [
        ("She's up all night 'til the sun", 1),
        ("I'm up all night to get some", 2),
        ("She's up all night for good fun", 3),
        ("I'm up all night to get lucky", 4),
    ];
    let value = SynchronisedLyricsValue {
        content_type: 1,
        timestamp_format: 2,
        language: Some(String::from("eng")),
        description: Some(String::from("Description")),
        text: lines
            .iter()
            .map(|(line, timestamp)| (line.to_string(), *timestamp))
            .collect(),
    };

    let mut expected = headers(312, "SYLT", 302);
    expected.push(1);
    expected.extend(latin1("eng"));
    expected.extend([2, 1]);
    expected.extend(BOM);
    expected.extend(utf16("Description"));
    expected.extend([0, 0]);
    for (line, timestamp) in lines {
        expected.extend(BOM);
        expected.extend(utf16(line));
        expected.extend([0, 0]);
        expected.extend(timestamp.to_be_bytes());
    }

    assert_eq!(write_single("SYLT", value), expected);
}

fn picture(signature: &[u8], description: &str, use_unicode_encoding: bool) -> PictureValue {
    let mut data = signature.to_vec();
    data.extend(IMAGE_CONTENT);
    PictureValue {
        picture_type: 3,
        data,
        description: description.to_string(),
        use_unicode_encoding,
    }
}

fn expected_latin1_picture(tag_size: u32, mime: &str, signature: &[u8], description: &str) -> Vec<u8> {
    let mut expected = headers(tag_size, "APIC", tag_size - 10);
    expected.push(0);
    expected.extend(latin1(mime));
    expected.extend([0, 3]);
    expected.extend(latin1(description));
    expected.push(0);
    expected.extend(signature);
    expected.extend(IMAGE_CONTENT);
    expected
}

#[test_log::test]
fn picture_signatures() {
    let cases: [(&[u8], &str, u32); 8] = [
        (&[0xFF, 0xD8, 0xFF], "image/jpeg", 35),
        (&[0x89, 0x50, 0x4E, 0x47], "image/png", 35),
        (&[0x47, 0x49, 0x46], "image/gif", 34),
        (
            &[0, 0, 0, 0, 0, 0, 0, 0, 0x57, 0x45, 0x42, 0x50],
            "image/webp",
            44,
        ),
        (&[0x49, 0x49, 0x2A, 0], "image/tiff", 36),
        (&[0x4D, 0x4D, 0, 0x2A], "image/tiff", 36),
        (&[0x42, 0x4D], "image/bmp", 33),
        (&[0, 0, 1, 0], "image/x-icon", 38),
    ];

    for (signature, mime, tag_size) in cases {
        let actual = write_single("APIC", picture(signature, "yo", false));
        let expected = expected_latin1_picture(tag_size, mime, signature, "yo");
        assert_eq!(actual, expected, "{mime}");
    }
}

#[test_log::test]
fn picture_with_unicode_description() {
    let signature = [0xFF, 0xD8, 0xFF];

    let mut expected = headers(40, "APIC", 30);
    expected.push(1);
    expected.extend(latin1("image/jpeg"));
    expected.extend([0, 3]);
    expected.extend(BOM);
    expected.extend(utf16("yo"));
    expected.extend([0, 0]);
    expected.extend(signature);
    expected.extend(IMAGE_CONTENT);

    assert_eq!(
        write_single("APIC", picture(&signature, "yo", true)),
        expected
    );
}

#[test_log::test]
fn empty_description_forces_western_encoding() {
    let signature = [0, 0, 1, 0];
    let expected = expected_latin1_picture(36, "image/x-icon", &signature, "");

    assert_eq!(
        write_single("APIC", picture(&signature, "", true)),
        expected
    );
}

#[test_log::test]
fn picture_errors() {
    let mut writer = util::writer();

    let err = writer.set_frame("APIC", 4512_u32).unwrap_err();
    assert!(err
        .to_string()
        .contains("APIC frame value should be an object with keys type, data and description"));

    let value = PictureValue {
        picture_type: 43,
        data: vec![0; 20],
        ..PictureValue::default()
    };
    let err = writer.set_frame("APIC", value).unwrap_err();
    assert!(err.to_string().contains("Incorrect APIC frame picture type"));

    let err = writer.set_frame("APIC", PictureValue::default()).unwrap_err();
    assert!(err.to_string().contains("Unknown picture MIME type"));

    assert!(writer.frames().is_empty());
}
