use std::path::{Path, PathBuf};

/// Coarse audio classification taken from the file extension.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MediaType {
    Unknown,
    Flac,
    Mp3,
    Wav,
    Aac,
}

impl MediaType {
    /// Classify by extension, case-insensitive.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase());

        match ext.as_deref() {
            Some("flac") => Self::Flac,
            Some("mp3") => Self::Mp3,
            Some("wav") => Self::Wav,
            Some("aac") => Self::Aac,
            _ => Self::Unknown,
        }
    }

    /// Numeric code used on the wire.
    pub fn code(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Flac => 1,
            Self::Mp3 => 2,
            Self::Wav => 3,
            Self::Aac => 4,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Flac => "audio/flac",
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::Aac => "audio/aac",
            Self::Unknown => "application/octet-stream",
        }
    }
}

/// One indexed audio file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub lyric_id: String,
    pub media_type: MediaType,
    pub source_path: PathBuf,
}

impl Track {
    /// Sibling `.lrc` file holding this track's lyrics.
    pub fn lyric_path(&self) -> PathBuf {
        self.source_path.with_extension("lrc")
    }

    /// Bare file name of the backing file, for content-disposition headers.
    pub fn file_name(&self) -> String {
        self.source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.id.clone())
    }
}
