//! texdrop - resolve a dropped texture into its texture set
//!
//! Acts as a minimal host for the texture set resolver: the dropped file and
//! its directory go in, a material binding report comes out.

mod cli;
mod host;

use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use texture_set::{
    ApplyMode, ApplyPlan, Config, FsLister, ResolverConfig, TextureSetHost, TextureSetResolver,
};

use cli::{ModeArg, Options};
use host::{ConsoleHost, MaterialSlot};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = cli::build_cli().get_matches();
    let options = Options::from_matches(&matches)?;

    let stdout = std::io::stdout();
    let result = run(&options, &mut stdout.lock());
    if let Err(e) = &result {
        log::error!("texdrop failed: {:#}", e);
    }
    result
}

fn run<W: Write>(options: &Options, out: &mut W) -> Result<()> {
    if let Some(path) = &options.write_default_config {
        ResolverConfig::default()
            .save_to_file(path)
            .with_context(|| format!("Failed to write default config to {:?}", path))?;
        log::info!("Wrote default resolver config to {:?}", path);
        return Ok(());
    }

    let config = match &options.config {
        Some(path) => ResolverConfig::load(path)
            .with_context(|| format!("Failed to load config {:?}", path))?,
        None => ResolverConfig::default(),
    };
    let resolver = TextureSetResolver::from_config(&config);

    let Some(dropped) = &options.dropped else {
        bail!("No dropped file given");
    };
    let (directory, filename) = split_dropped(dropped, options.directory.as_deref())?;

    if !resolver.accepts_drop(&filename) {
        bail!("{:?} is not a recognized image file", filename);
    }

    log::info!("Resolving {:?} in {:?}", filename, directory);
    let (texture_set, base_name) = resolver
        .resolve_dir(&FsLister, &directory, &filename)
        .with_context(|| format!("Failed to resolve texture set for {:?}", dropped))?;

    let mode = match options.mode {
        ModeArg::Smart => ApplyMode::Smart,
        ModeArg::SingleGuessed => ApplyMode::Single(resolver.guess_role(&filename)),
        ModeArg::Single(role) => ApplyMode::Single(role),
    };
    let plan = ApplyPlan::new(
        mode,
        &texture_set,
        &base_name,
        &directory.join(&filename),
        &config.default_material_label,
    );

    let mut slot = match &options.material {
        Some(name) => MaterialSlot::with_material(name.clone()),
        None => MaterialSlot::default(),
    };
    ConsoleHost::new(out, options.format).apply_texture_set(&plan, &mut slot)
}

/// Directory to scan and the bare filename of the dropped file
fn split_dropped(dropped: &Path, directory: Option<&Path>) -> Result<(PathBuf, String)> {
    let filename = dropped
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("{:?} has no usable file name", dropped))?
        .to_string();

    let directory = match directory {
        Some(dir) => dir.to_path_buf(),
        None => match dropped.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
    };

    Ok((directory, filename))
}
