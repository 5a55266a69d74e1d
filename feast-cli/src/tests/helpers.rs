//! Fixture files for plan command tests.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::json;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// A temporary directory holding a request and both catalog flavours.
#[derive(Debug)]
pub(super) struct PlanFiles {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) request: Utf8PathBuf,
    pub(super) listings: Utf8PathBuf,
    pub(super) markets: Utf8PathBuf,
}

impl PlanFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let request = root.join("request.json");
        let listings = root.join("listings.json");
        let markets = root.join("markets.json");
        Self {
            _dir: dir,
            root,
            request,
            listings,
            markets,
        }
    }

    pub(super) fn write_request(&self, request: &serde_json::Value) {
        write_utf8(&self.request, request.to_string().as_bytes());
    }

    /// Listings where "Hilltop" stocks tomatoes and basil and "Riverside"
    /// only tomatoes.
    pub(super) fn write_listings(&self) {
        let rows = json!([
            { "market": "Riverside", "product": "Tomatoes, heirloom", "farmer": "Ada" },
            { "market": "Hilltop", "product": "Tomato", "farmer": "Bea" },
            { "market": "Hilltop", "product": "Basil", "farmer": "Cy" },
            { "market": "Hilltop", "product": "Pumpkins", "farmer": "Cy" },
        ]);
        write_utf8(&self.listings, rows.to_string().as_bytes());
    }

    /// Markets "A" (tomato) and "B" (basil).
    pub(super) fn write_markets(&self) {
        let markets = json!([
            { "name": "A", "availability": { "tomato": true, "basil": false } },
            { "name": "B", "availability": { "basil": true } },
        ]);
        write_utf8(&self.markets, markets.to_string().as_bytes());
    }
}
