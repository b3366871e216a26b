//! JSON output formatting

use std::io;
use std::path::Path;

use serde::Serialize;

use crate::fs::FileSystem;
use crate::listing::FileListing;
use crate::tree::FileEntry;

#[derive(Serialize)]
struct JsonListing<'a> {
    current_dir: &'a Path,
    entries: &'a [FileEntry],
}

/// Serialize a listing as pretty-printed JSON.
pub fn to_json<F: FileSystem>(listing: &FileListing<F>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonListing {
        current_dir: listing.current_dir(),
        entries: listing.entries(),
    })
}

/// Print a listing as pretty-printed JSON to stdout.
pub fn print_json<F: FileSystem>(listing: &FileListing<F>) -> io::Result<()> {
    let json = to_json(listing).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MemoryFileSystem;
    use crate::tree::ListingPolicy;

    #[test]
    fn test_json_shape() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("/data/a.csv");
        let listing = FileListing::with_filesystem(fs, "/data", ListingPolicy::default()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&to_json(&listing).unwrap()).unwrap();
        assert_eq!(value["current_dir"], "/data");
        let entries = value["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["kind"], "parent");
        assert_eq!(entries[0]["depth"], -1);
        assert_eq!(entries[1]["name"], "a.csv");
        assert_eq!(entries[1]["path"], "/data/a.csv");
        assert_eq!(entries[1]["kind"], "file");
        assert_eq!(entries[1]["depth"], 1);
    }
}
