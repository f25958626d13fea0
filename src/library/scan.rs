use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::tags::TagReader;

use super::catalog::Catalog;
use super::id::track_id;
use super::model::{MediaType, Track};

/// Counters collected while building the catalog.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Distinct tracks added; equals the catalog length after a scan.
    pub accepted: usize,
    pub open_failures: usize,
    pub tag_failures: usize,
    pub walk_errors: usize,
    pub replaced: usize,
    pub missing_roots: Vec<PathBuf>,
    pub dropped_roots: Vec<PathBuf>,
}

fn is_audio_file(path: &Path) -> bool {
    MediaType::from_path(path) != MediaType::Unknown
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Split `roots` into the ones to scan and the ones dropped past `max`.
pub fn bound_roots(roots: &[PathBuf], max: usize) -> (&[PathBuf], &[PathBuf]) {
    roots.split_at(roots.len().min(max))
}

/// Walk every root and build the catalog. Per-entry failures are logged and
/// skipped; they never abort the scan.
pub fn scan(
    roots: &[PathBuf],
    settings: &LibrarySettings,
    reader: &dyn TagReader,
) -> (Catalog, ScanReport) {
    let mut catalog = Catalog::new();
    let mut report = ScanReport::default();

    let (kept, dropped) = bound_roots(roots, settings.max_roots);
    if !dropped.is_empty() {
        warn!(
            max_roots = settings.max_roots,
            dropped = ?dropped,
            "too many scan roots, ignoring the excess"
        );
        report.dropped_roots = dropped.to_vec();
    }

    for root in kept {
        if !root.exists() {
            warn!(root = %root.display(), "scan root does not exist, skipping");
            report.missing_roots.push(root.clone());
            continue;
        }
        scan_root(root, settings, reader, &mut catalog, &mut report);
    }

    info!(
        tracks = catalog.len(),
        accepted = report.accepted,
        replaced = report.replaced,
        open_failures = report.open_failures,
        tag_failures = report.tag_failures,
        walk_errors = report.walk_errors,
        "library scan finished"
    );

    (catalog, report)
}

fn scan_root(
    root: &Path,
    settings: &LibrarySettings,
    reader: &dyn TagReader,
    catalog: &mut Catalog,
    report: &mut ScanReport,
) {
    let mut walker = WalkDir::new(root).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(root = %root.display(), error = %err, "failed to read directory entry");
                report.walk_errors += 1;
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_file() && is_audio_file(path) {
            register(path, reader, catalog, report);
        }
    }
}

fn register(path: &Path, reader: &dyn TagReader, catalog: &mut Catalog, report: &mut ScanReport) {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "unable to open file");
            report.open_failures += 1;
            return;
        }
    };

    let info = match reader.read(&mut file) {
        Ok(info) => info,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to read tag");
            report.tag_failures += 1;
            return;
        }
    };

    let id = track_id(path);
    let track = Track {
        lyric_id: id.clone(),
        id,
        title: info.title.unwrap_or_default(),
        artist: info.artist.unwrap_or_default(),
        media_type: MediaType::from_path(path),
        source_path: path.to_path_buf(),
    };

    debug!(id = %track.id, path = %path.display(), "registered track");
    if catalog.insert(track) {
        warn!(path = %path.display(), "track id already registered, replacing earlier entry");
        report.replaced += 1;
    } else {
        report.accepted += 1;
    }
}
