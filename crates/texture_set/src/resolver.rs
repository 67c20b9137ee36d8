//! Texture set resolver
//!
//! Given a directory listing and the file the user dropped, finds the sibling
//! files that share the dropped file's base name and assigns each a role.
//!
//! Resolution runs in four steps:
//!
//! 1. Derive the base name by stripping the longest known suffix from the
//!    dropped file's stem.
//! 2. Scan the listing. Files whose name starts with the base name and whose
//!    extension is an image extension are classified; the first file found
//!    for a role keeps the slot. A file whose stem equals the base name is
//!    remembered as a fallback base color.
//! 3. Promote the fallback to base color if no explicit color map was found.
//! 4. Make sure the dropped file itself is in the set, under its guessed
//!    role, unless that slot is taken.

use std::path::{Path, PathBuf};

use crate::config::ResolverConfig;
use crate::error::TextureSetError;
use crate::listing::{split_extension, CandidateFile, DirectoryLister, FsLister};
use crate::role::Role;
use crate::set::{BaseName, TextureSet};
use crate::suffix::{SuffixMatch, SuffixTable, IMAGE_EXTENSIONS};

/// Resolves a dropped texture into its texture set
#[derive(Debug, Clone)]
pub struct TextureSetResolver {
    table: SuffixTable,
    image_extensions: Vec<String>,
}

impl Default for TextureSetResolver {
    fn default() -> Self {
        Self {
            table: SuffixTable::default(),
            image_extensions: IMAGE_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect(),
        }
    }
}

impl TextureSetResolver {
    /// Create a resolver from a suffix table and image extensions
    ///
    /// Extensions are compared case-insensitively and must carry their
    /// leading dot.
    pub fn new<I, S>(table: SuffixTable, image_extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            table,
            image_extensions: image_extensions
                .into_iter()
                .map(|ext| ext.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Create a resolver from configuration
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.suffix_table(), &config.image_extensions)
    }

    /// Suffix table used for classification
    pub fn suffix_table(&self) -> &SuffixTable {
        &self.table
    }

    /// Whether `extension` (with leading dot) names an image type
    pub fn is_image_extension(&self, extension: &str) -> bool {
        self.image_extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }

    /// Whether a dropped file should be handled at all
    pub fn accepts_drop(&self, filename: &str) -> bool {
        self.is_image_extension(split_extension(filename).1)
    }

    /// Guess the role of a single file from its name
    pub fn guess_role(&self, filename: &str) -> Role {
        self.table.classify_filename(filename)
    }

    /// Base name of the set the dropped file belongs to
    pub fn derive_base_name(&self, dropped_filename: &str) -> BaseName {
        let stem = split_extension(dropped_filename).0;
        BaseName::new(self.table.strip_known_suffix(stem))
    }

    /// Resolve against a listing that has already been read
    ///
    /// Paths in the result are `directory` joined with each file name. The
    /// dropped file is not required to appear in `listing`.
    pub fn resolve(
        &self,
        listing: &[CandidateFile],
        directory: &Path,
        dropped_filename: &str,
    ) -> (TextureSet, BaseName) {
        let base_name = self.derive_base_name(dropped_filename);
        let base_lower = base_name.as_str().to_lowercase();

        let mut texture_set = TextureSet::new();
        let mut fallback_base_color: Option<PathBuf> = None;

        for file in listing {
            if !file.name.to_lowercase().starts_with(&base_lower) {
                log::debug!("Skipping {}: not part of set '{}'", file.name, base_name);
                continue;
            }
            if !self.is_image_extension(&file.extension) {
                log::debug!("Skipping {}: not an image extension", file.name);
                continue;
            }

            let stem = file.stem();
            let path = directory.join(&file.name);

            match self.table.find_match(stem) {
                Some(SuffixMatch::Role { role, suffix }) => {
                    if texture_set.insert_if_vacant(role, &path) {
                        log::debug!("{} -> {} (suffix {})", file.name, role, suffix);
                    } else {
                        log::debug!("{} ignored: {} already assigned", file.name, role);
                    }
                }
                Some(SuffixMatch::BaseColor { suffix }) => {
                    if texture_set.insert_if_vacant(Role::BaseColor, &path) {
                        log::debug!("{} -> {} (suffix {})", file.name, Role::BaseColor, suffix);
                    } else {
                        log::debug!("{} ignored: {} already assigned", file.name, Role::BaseColor);
                    }
                }
                None => {
                    if stem.to_lowercase() == base_lower && fallback_base_color.is_none() {
                        log::debug!("{} kept as fallback base color", file.name);
                        fallback_base_color = Some(path);
                    }
                }
            }
        }

        if !texture_set.contains_role(Role::BaseColor) {
            if let Some(path) = fallback_base_color {
                texture_set.insert_if_vacant(Role::BaseColor, path);
            }
        }

        let dropped_path = directory.join(dropped_filename);
        if !texture_set.contains_path(&dropped_path) {
            let role = self.guess_role(dropped_filename);
            if texture_set.is_empty() {
                log::warn!(
                    "No texture set found for {:?}, using dropped file as {}",
                    dropped_filename,
                    role
                );
            }
            if texture_set.insert_if_vacant(role, &dropped_path) {
                log::debug!("{} -> {} (dropped file)", dropped_filename, role);
            }
        }

        log::info!(
            "Resolved texture set '{}' with {} map(s): {}",
            base_name,
            texture_set.len(),
            texture_set
                .roles()
                .map(Role::label)
                .collect::<Vec<_>>()
                .join(", ")
        );

        (texture_set, base_name)
    }

    /// List `directory` through `lister`, then resolve
    ///
    /// Fails without a partial result when the directory cannot be listed.
    pub fn resolve_dir<L>(
        &self,
        lister: &L,
        directory: impl AsRef<Path>,
        dropped_filename: &str,
    ) -> Result<(TextureSet, BaseName), TextureSetError>
    where
        L: DirectoryLister + ?Sized,
    {
        let directory = directory.as_ref();
        let listing = lister.list(directory)?;
        Ok(self.resolve(&listing, directory, dropped_filename))
    }
}

/// Resolve a dropped file against its directory on disk with default settings
pub fn resolve_texture_set(
    directory: impl AsRef<Path>,
    dropped_filename: &str,
) -> Result<(TextureSet, BaseName), TextureSetError> {
    TextureSetResolver::default().resolve_dir(&FsLister, directory, dropped_filename)
}
