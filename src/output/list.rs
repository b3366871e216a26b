//! Plain and coloured list output
//!
//! One line per entry. Directories are blue, inaccessible entries red and the
//! parent entry cyan when colours are enabled.

use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::fs::FileSystem;
use crate::listing::FileListing;
use crate::tree::{EntryKind, FileEntry};

use super::config::OutputConfig;

/// Formatter printing a listing as one entry per line.
pub struct ListFormatter {
    config: OutputConfig,
}

impl ListFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the listing without colours.
    pub fn format<F: FileSystem>(&self, listing: &FileListing<F>) -> String {
        let mut out = NoColor::new(Vec::new());
        // Writing into a Vec cannot fail.
        let _ = self.write(listing, &mut out);
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    /// Print the listing to stdout.
    pub fn print<F: FileSystem>(&self, listing: &FileListing<F>) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write(listing, &mut stdout)
    }

    /// Write the listing to any colour-capable writer.
    pub fn write<F: FileSystem, W: WriteColor>(
        &self,
        listing: &FileListing<F>,
        out: &mut W,
    ) -> io::Result<()> {
        for entry in listing.entries() {
            let label = if self.config.absolute_paths {
                entry.path.to_string_lossy().into_owned()
            } else {
                listing.relative_name(entry)
            };
            out.set_color(&color_spec(entry))?;
            write!(out, "{}", label)?;
            out.reset()?;
            writeln!(out)?;
        }
        Ok(())
    }
}

fn color_spec(entry: &FileEntry) -> ColorSpec {
    let mut spec = ColorSpec::new();
    match entry.kind {
        EntryKind::Parent => {
            spec.set_fg(Some(Color::Cyan));
        }
        EntryKind::Directory => {
            spec.set_fg(Some(Color::Blue)).set_bold(true);
        }
        EntryKind::Inaccessible => {
            spec.set_fg(Some(Color::Red));
        }
        EntryKind::RegularFile | EntryKind::Unknown => {}
    }
    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MemoryFileSystem;
    use crate::tree::ListingPolicy;

    fn listing() -> FileListing<MemoryFileSystem> {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("/srv/site/index.html");
        fs.add_file("/srv/readme.md");
        let policy = ListingPolicy {
            depth_limit: 2,
            ..Default::default()
        };
        FileListing::with_filesystem(fs, "/srv", policy).unwrap()
    }

    #[test]
    fn test_format_relative_names() {
        let formatter = ListFormatter::new(OutputConfig::default());
        assert_eq!(
            formatter.format(&listing()),
            "..\nsite\nsite/index.html\nreadme.md\n"
        );
    }

    #[test]
    fn test_format_absolute_paths() {
        let formatter = ListFormatter::new(OutputConfig {
            use_color: false,
            absolute_paths: true,
        });
        assert_eq!(
            formatter.format(&listing()),
            "/\n/srv/site\n/srv/site/index.html\n/srv/readme.md\n"
        );
    }

    #[test]
    fn test_directory_color() {
        let dir = FileEntry::new("/d".into(), "d", EntryKind::Directory, 1);
        let spec = color_spec(&dir);
        assert_eq!(spec.fg(), Some(&Color::Blue));
        assert!(spec.bold());

        let file = FileEntry::new("/f".into(), "f", EntryKind::RegularFile, 1);
        assert!(color_spec(&file).is_none());
    }
}
