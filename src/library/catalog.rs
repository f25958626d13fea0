use std::collections::HashMap;

use super::model::Track;

/// Tracks in discovery order plus an id index.
///
/// Filled by the scanner, then shared read-only behind an `Arc` for the life
/// of the process.
#[derive(Debug, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `track`, replacing an existing entry with the same id in place.
    /// Returns `true` when an entry was replaced.
    pub(super) fn insert(&mut self, track: Track) -> bool {
        match self.index.get(&track.id) {
            Some(&pos) => {
                self.tracks[pos] = track;
                true
            }
            None => {
                self.index.insert(track.id.clone(), self.tracks.len());
                self.tracks.push(track);
                false
            }
        }
    }

    pub fn lookup(&self, id: &str) -> Option<&Track> {
        self.index.get(id).map(|&pos| &self.tracks[pos])
    }

    pub fn list(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::MediaType;
    use std::path::PathBuf;

    fn t(id: &str, title: &str) -> Track {
        Track {
            id: id.into(),
            title: title.into(),
            artist: String::new(),
            lyric_id: id.into(),
            media_type: MediaType::Mp3,
            source_path: PathBuf::from(format!("/music/{title}.mp3")),
        }
    }

    #[test]
    fn keeps_insertion_order_and_indexes_every_track() {
        let mut c = Catalog::new();
        assert!(c.is_empty());
        c.insert(t("b", "Beta"));
        c.insert(t("a", "Alpha"));
        c.insert(t("c", "Gamma"));

        let titles: Vec<&str> = c.list().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Beta", "Alpha", "Gamma"]);
        for track in c.list() {
            assert_eq!(c.lookup(&track.id), Some(track));
        }
        assert!(c.lookup("zzz").is_none());
    }

    #[test]
    fn duplicate_id_replaces_in_place() {
        let mut c = Catalog::new();
        assert!(!c.insert(t("a", "Alpha")));
        assert!(!c.insert(t("b", "Beta")));
        assert!(c.insert(t("a", "Alpha Remaster")));

        assert_eq!(c.len(), 2);
        assert_eq!(c.list()[0].title, "Alpha Remaster");
        assert_eq!(c.lookup("a").unwrap().title, "Alpha Remaster");
        assert_eq!(c.lookup("b").unwrap().title, "Beta");
    }
}
