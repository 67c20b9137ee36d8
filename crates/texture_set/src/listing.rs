//! Directory listing
//!
//! The resolver never touches the filesystem directly. It asks a
//! [`DirectoryLister`] for the entries of one directory, which lets tests
//! control listing order without creating files.

use std::fs;
use std::path::Path;

use crate::error::TextureSetError;

/// Split a filename into stem and extension
///
/// The extension keeps its leading dot. Leading dots do not start an
/// extension, so `.png` has the stem `.png` and no extension.
pub fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(dot) if filename[..dot].chars().any(|c| c != '.') => {
            (&filename[..dot], &filename[dot..])
        }
        _ => (filename, ""),
    }
}

/// One directory entry considered for a texture set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Entry name including extension
    pub name: String,
    /// Lowercase extension with leading dot, empty when absent
    pub extension: String,
}

impl CandidateFile {
    /// Create a candidate from an entry name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let extension = split_extension(&name).1.to_lowercase();
        Self { name, extension }
    }

    /// Entry name without its extension
    pub fn stem(&self) -> &str {
        split_extension(&self.name).0
    }
}

impl From<&str> for CandidateFile {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Source of directory entries
pub trait DirectoryLister {
    /// List the entries of `directory` in whatever order the source produces
    fn list(&self, directory: &Path) -> Result<Vec<CandidateFile>, TextureSetError>;
}

impl<F> DirectoryLister for F
where
    F: Fn(&Path) -> Result<Vec<CandidateFile>, TextureSetError>,
{
    fn list(&self, directory: &Path) -> Result<Vec<CandidateFile>, TextureSetError> {
        self(directory)
    }
}

/// Lists a real directory with [`std::fs::read_dir`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, directory: &Path) -> Result<Vec<CandidateFile>, TextureSetError> {
        let entries = fs::read_dir(directory)
            .map_err(|e| TextureSetError::directory_access(directory, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| TextureSetError::directory_access(directory, e))?;
            match entry.file_name().into_string() {
                Ok(name) => files.push(CandidateFile::new(name)),
                Err(raw) => log::warn!("Skipping non UTF-8 entry {:?} in {:?}", raw, directory),
            }
        }

        log::debug!("Listed {} entries in {:?}", files.len(), directory);
        Ok(files)
    }
}

/// Fixed, in-memory listing returned for any directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticListing {
    files: Vec<CandidateFile>,
}

impl StaticListing {
    /// Build a listing from entry names, keeping their order
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: names.into_iter().map(CandidateFile::new).collect(),
        }
    }

    /// Entries in listing order
    pub fn files(&self) -> &[CandidateFile] {
        &self.files
    }
}

impl DirectoryLister for StaticListing {
    fn list(&self, _directory: &Path) -> Result<Vec<CandidateFile>, TextureSetError> {
        Ok(self.files.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("wood_normal.png"), ("wood_normal", ".png"));
        assert_eq!(split_extension("wood.normal.PNG"), ("wood.normal", ".PNG"));
        assert_eq!(split_extension("wood"), ("wood", ""));
        assert_eq!(split_extension(".png"), (".png", ""));
        assert_eq!(split_extension("..png"), ("..png", ""));
        assert_eq!(split_extension("wood."), ("wood", "."));
        assert_eq!(split_extension(""), ("", ""));
    }

    #[test]
    fn test_candidate_extension_is_lowercase() {
        let file = CandidateFile::new("Brick_Normal.TGA");
        assert_eq!(file.extension, ".tga");
        assert_eq!(file.stem(), "Brick_Normal");
        assert_eq!(file.name, "Brick_Normal.TGA");
    }

    #[test]
    fn test_static_listing_keeps_order() {
        let listing = StaticListing::from_names(["b.png", "a.png", "c.jpg"]);
        let files = listing.list(Path::new("/anywhere")).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["b.png", "a.png", "c.jpg"]);
    }

    #[test]
    fn test_closure_lister() {
        let lister = |dir: &Path| -> Result<Vec<CandidateFile>, TextureSetError> {
            Ok(vec![CandidateFile::new(format!("{}.png", dir.display()))])
        };
        let files = lister.list(Path::new("stone")).unwrap();
        assert_eq!(files, vec![CandidateFile::new("stone.png")]);
    }

    #[test]
    fn test_fs_lister_reads_directory() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("wood_normal.png")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();

        let mut names: Vec<_> = FsLister
            .list(dir.path())
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        names.sort();
        assert_eq!(names, ["notes.txt", "wood_normal.png"]);
    }

    #[test]
    fn test_fs_lister_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does_not_exist");

        let result = FsLister.list(&missing);
        match result {
            Err(TextureSetError::DirectoryAccess { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected DirectoryAccess error, got {:?}", other),
        }
    }
}
