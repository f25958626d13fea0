//! Library scanning and the in-memory catalog.
//!
//! `scan` walks the configured roots and produces a [`Catalog`] of
//! [`Track`]s; the catalog is read-only once the scan returns.

mod catalog;
mod id;
mod model;
mod scan;

pub use catalog::Catalog;
pub use model::Track;
pub use scan::scan;

#[cfg(test)]
pub use id::track_id;
#[cfg(test)]
pub use model::MediaType;
#[cfg(test)]
pub use scan::{ScanReport, bound_roots};
