use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "cadenza", version, about = "Serve a local music folder over HTTP")]
pub struct Cli {
    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory containing music files (may be repeated)
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dirs: Vec<PathBuf>,

    /// Additional directories to scan
    #[arg(value_name = "ROOT")]
    pub roots: Vec<PathBuf>,
}

impl Cli {
    /// Scan roots given on the command line: `--dir` values first, then
    /// positional ones.
    pub fn scan_roots(&self) -> Vec<PathBuf> {
        self.dirs.iter().chain(&self.roots).cloned().collect()
    }
}
