//! Embedded tag extraction.
//!
//! The scanner and the cover endpoint only see the [`TagReader`] trait. The
//! production implementation is [`LoftyTagReader`], backed by `lofty`.

use std::fs::File;
use std::path::Path;

use lofty::error::LoftyError;
use lofty::file::TaggedFileExt;
use lofty::tag::Accessor;

#[cfg(test)]
pub mod fixture;

/// A picture embedded in an audio file's tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedPicture {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// The subset of tag data the catalog cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagInfo {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub pictures: Vec<EmbeddedPicture>,
}

#[derive(Debug, thiserror::Error)]
pub enum TagError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unreadable tag: {0}")]
    Parse(#[from] LoftyError),
    #[error("no tag found")]
    NoTag,
    #[error("no embedded picture")]
    NoPicture,
}

/// Reads embedded metadata from an already opened audio file.
pub trait TagReader: Send + Sync {
    fn read(&self, file: &mut File) -> Result<TagInfo, TagError>;
}

/// [`TagReader`] backed by `lofty`. Files without any tag are rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyTagReader;

impl TagReader for LoftyTagReader {
    fn read(&self, file: &mut File) -> Result<TagInfo, TagError> {
        let tagged = lofty::read_from(file)?;
        let tag = tagged
            .primary_tag()
            .or_else(|| tagged.first_tag())
            .ok_or(TagError::NoTag)?;

        let title = tag.title().map(|v| v.trim().to_string());
        let artist = tag.artist().map(|v| v.trim().to_string());

        let pictures = tag
            .pictures()
            .iter()
            .filter(|pic| !pic.data().is_empty())
            .map(|pic| EmbeddedPicture {
                mime_type: pic
                    .mime_type()
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string()),
                data: pic.data().to_vec(),
            })
            .collect();

        Ok(TagInfo {
            title,
            artist,
            pictures,
        })
    }
}

/// Open `path` and return its first embedded picture.
pub fn extract_cover(reader: &dyn TagReader, path: &Path) -> Result<EmbeddedPicture, TagError> {
    let mut file = File::open(path)?;
    let info = reader.read(&mut file)?;
    info.pictures.into_iter().next().ok_or(TagError::NoPicture)
}
