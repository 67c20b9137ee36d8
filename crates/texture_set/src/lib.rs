//! # Texture Set
//!
//! Discovers PBR texture sets from filenames.
//!
//! Given a directory and one file the user dropped, the resolver finds the
//! sibling files that belong to the same set, assigns each a material role
//! (base color, metallic, roughness, normal) from its filename suffix, and
//! reports the common base name of the set.
//!
//! ## Features
//!
//! - **Suffix Classification**: Longest-match, case-insensitive suffix table
//! - **Set Resolution**: First-wins role slots with a bare-stem base color fallback
//! - **Injected Listing**: Filesystem access behind [`DirectoryLister`]
//! - **Host Planning**: Color space and binding plan for material hosts
//! - **Configurable**: Suffixes and extensions from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use texture_set::prelude::*;
//!
//! fn main() -> Result<(), TextureSetError> {
//!     let (set, base_name) = resolve_texture_set("textures/wood", "wood_normal.png")?;
//!     for (role, path) in set.iter() {
//!         println!("{}: {}", role, path.display());
//!     }
//!     println!("Material: {}", base_name.material_label("Material"));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub mod apply;
pub mod config;
pub mod error;
pub mod listing;
pub mod resolver;
pub mod role;
pub mod set;
pub mod suffix;

pub use apply::{ApplyMode, ApplyPlan, ColorSpace, TextureBinding, TextureSetHost};
pub use config::{Config, ConfigError, ResolverConfig, SuffixEntry};
pub use error::TextureSetError;
pub use listing::{CandidateFile, DirectoryLister, FsLister, StaticListing};
pub use resolver::{resolve_texture_set, TextureSetResolver};
pub use role::{ParseRoleError, Role};
pub use set::{BaseName, TextureSet};
pub use suffix::{classify, SuffixTable};

/// Common imports for texture set users
pub mod prelude {
    pub use crate::{
        resolve_texture_set,
        ApplyMode, ApplyPlan, BaseName, CandidateFile, ColorSpace, DirectoryLister, FsLister,
        ResolverConfig, Role, TextureBinding, TextureSet, TextureSetError, TextureSetHost,
        TextureSetResolver,
    };
}
