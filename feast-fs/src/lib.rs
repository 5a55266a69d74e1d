//! Capability-based file access for the Farmer Feast command line.
//!
//! Input files are opened through `cap-std` directory handles so that every
//! read goes through an explicit authority, and paths stay UTF-8 via `camino`.
#![forbid(unsafe_code)]

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open the directory holding `path` and return it with the file name.
///
/// # Errors
/// Fails when `path` has no file name or its parent directory cannot be
/// opened.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Open `path` for reading.
///
/// # Errors
/// Propagates any error from opening the parent directory or the file.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.open(name.as_str())
}

/// Whether `path` is a regular file.
///
/// # Errors
/// Fails with [`io::ErrorKind::NotFound`] when `path` or its parent is
/// missing, and with the underlying error for any other lookup failure.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use std::io::Read;
    use tempfile::TempDir;

    #[fixture]
    fn workspace() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp path");
        (dir, root)
    }

    #[rstest]
    fn reads_file_contents(workspace: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workspace;
        let path = root.join("request.json");
        std::fs::write(&path, "{\"ingredients\":[]}").expect("write fixture");

        let mut contents = String::new();
        open_utf8_file(&path)
            .expect("open fixture")
            .read_to_string(&mut contents)
            .expect("read fixture");
        assert_eq!(contents, "{\"ingredients\":[]}");
    }

    #[rstest]
    fn distinguishes_files_directories_and_missing_paths(workspace: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workspace;
        let file = root.join("markets.json");
        std::fs::write(&file, "[]").expect("write fixture");
        std::fs::create_dir(root.join("nested")).expect("create dir");

        assert!(file_is_file(&file).expect("stat file"));
        assert!(!file_is_file(&root.join("nested")).expect("stat dir"));
        let missing = file_is_file(&root.join("absent.json")).expect_err("missing file");
        assert_eq!(missing.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn missing_parent_is_an_error(workspace: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workspace;
        assert!(open_utf8_file(&root.join("absent/request.json")).is_err());
        assert!(file_is_file(&root.join("absent/request.json")).is_err());
    }

    #[rstest]
    fn bare_file_names_resolve_against_current_dir() {
        let (_dir, name) = open_dir_and_file(Utf8Path::new("Cargo.toml")).expect("open cwd");
        assert_eq!(name, "Cargo.toml");
    }
}
