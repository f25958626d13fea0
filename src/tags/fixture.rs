//! Test-only tag reader over a tiny line-based fixture format, so catalog and
//! endpoint tests do not need real encoded audio.
//!
//! ```text
//! CADENZA-FIXTURE
//! title=Test
//! artist=Artist
//! picture=image/jpeg:<raw bytes up to end of line>
//! ```

use std::fs::File;
use std::io::{self, Read};

use super::{EmbeddedPicture, TagError, TagInfo, TagReader};

const MAGIC: &[u8] = b"CADENZA-FIXTURE\n";

/// Build fixture file contents. Picture bytes must not contain `\n`.
pub fn tagged(title: &str, artist: &str, pictures: &[(&str, &[u8])]) -> Vec<u8> {
    let mut out = MAGIC.to_vec();
    out.extend_from_slice(format!("title={title}\nartist={artist}\n").as_bytes());
    for (mime, data) in pictures {
        out.extend_from_slice(format!("picture={mime}:").as_bytes());
        out.extend_from_slice(data);
        out.push(b'\n');
    }
    out
}

pub struct FixtureTagReader;

impl TagReader for FixtureTagReader {
    fn read(&self, file: &mut File) -> Result<TagInfo, TagError> {
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;

        let Some(body) = buf.strip_prefix(MAGIC) else {
            return Err(TagError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                "not a fixture file",
            )));
        };

        let mut info = TagInfo::default();
        for line in body.split(|b| *b == b'\n') {
            if let Some(v) = line.strip_prefix(b"title=") {
                info.title = Some(String::from_utf8_lossy(v).into_owned());
            } else if let Some(v) = line.strip_prefix(b"artist=") {
                info.artist = Some(String::from_utf8_lossy(v).into_owned());
            } else if let Some(v) = line.strip_prefix(b"picture=") {
                if let Some(colon) = v.iter().position(|b| *b == b':') {
                    info.pictures.push(EmbeddedPicture {
                        mime_type: String::from_utf8_lossy(&v[..colon]).into_owned(),
                        data: v[colon + 1..].to_vec(),
                    });
                }
            }
        }
        Ok(info)
    }
}
