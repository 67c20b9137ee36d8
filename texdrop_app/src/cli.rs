//! Command-line arguments

use anyhow::{anyhow, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use texture_set::Role;

use crate::host::OutputFormat;

/// Value of `--single` that picks the role from the dropped filename
const AUTO_ROLE: &str = "auto";

/// How the dropped file is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Apply the whole texture set
    Smart,
    /// Apply only the dropped file, role guessed from its name
    SingleGuessed,
    /// Apply only the dropped file to the given role
    Single(Role),
}

/// Parsed command line
#[derive(Debug, Clone)]
pub struct Options {
    /// Dropped texture file
    pub dropped: Option<PathBuf>,
    /// Directory to scan instead of the dropped file's parent
    pub directory: Option<PathBuf>,
    /// Resolver configuration file
    pub config: Option<PathBuf>,
    /// Apply mode
    pub mode: ModeArg,
    /// Material already on the target, if any
    pub material: Option<String>,
    /// Report format
    pub format: OutputFormat,
    /// Write the default configuration here and exit
    pub write_default_config: Option<PathBuf>,
}

pub fn build_cli() -> Command {
    Command::new("texdrop")
        .about("Finds the texture set a dropped image belongs to and plans its material bindings")
        .arg(
            Arg::new("path")
                .value_name("FILE")
                .help("Dropped texture file")
                .value_parser(clap::value_parser!(PathBuf))
                .required_unless_present("write-default-config"),
        )
        .arg(
            Arg::new("dir")
                .short('d')
                .long("dir")
                .value_name("DIR")
                .help("Directory to scan (defaults to the file's directory)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Resolver configuration (.toml or .ron)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("single")
                .short('s')
                .long("single")
                .value_name("ROLE")
                .help("Apply only the dropped file, to ROLE or to its guessed role")
                .num_args(0..=1)
                .default_missing_value(AUTO_ROLE),
        )
        .arg(
            Arg::new("material")
                .short('m')
                .long("material")
                .value_name("NAME")
                .help("Existing material on the target; a new one is named after the set otherwise"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Report format")
                .value_parser(["text", "ron", "toml"])
                .default_value("text"),
        )
        .arg(
            Arg::new("write-default-config")
                .long("write-default-config")
                .value_name("FILE")
                .help("Write the default resolver configuration and exit")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

impl Options {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let mode = match matches.get_one::<String>("single").map(String::as_str) {
            None => ModeArg::Smart,
            Some(AUTO_ROLE) => ModeArg::SingleGuessed,
            Some(role) => ModeArg::Single(role.parse().map_err(|e| anyhow!("{}", e))?),
        };

        let format = match matches.get_one::<String>("format").map(String::as_str) {
            Some("ron") => OutputFormat::Ron,
            Some("toml") => OutputFormat::Toml,
            _ => OutputFormat::Text,
        };

        Ok(Self {
            dropped: matches.get_one::<PathBuf>("path").cloned(),
            directory: matches.get_one::<PathBuf>("dir").cloned(),
            config: matches.get_one::<PathBuf>("config").cloned(),
            mode,
            material: matches.get_one::<String>("material").cloned(),
            format,
            write_default_config: matches.get_one::<PathBuf>("write-default-config").cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options> {
        let matches = build_cli().try_get_matches_from(args)?;
        Options::from_matches(&matches)
    }

    #[test]
    fn test_defaults() {
        let options = parse(&["texdrop", "tex/wood_normal.png"]).unwrap();
        assert_eq!(options.dropped, Some(PathBuf::from("tex/wood_normal.png")));
        assert_eq!(options.mode, ModeArg::Smart);
        assert_eq!(options.format, OutputFormat::Text);
        assert!(options.directory.is_none());
        assert!(options.material.is_none());
    }

    #[test]
    fn test_single_mode() {
        let options = parse(&["texdrop", "a.png", "--single"]).unwrap();
        assert_eq!(options.mode, ModeArg::SingleGuessed);

        let options = parse(&["texdrop", "a.png", "--single", "roughness"]).unwrap();
        assert_eq!(options.mode, ModeArg::Single(Role::Roughness));

        assert!(parse(&["texdrop", "a.png", "--single", "emission"]).is_err());
    }

    #[test]
    fn test_path_required_unless_writing_config() {
        assert!(parse(&["texdrop"]).is_err());

        let options = parse(&["texdrop", "--write-default-config", "resolver.toml"]).unwrap();
        assert_eq!(options.write_default_config, Some(PathBuf::from("resolver.toml")));
        assert!(options.dropped.is_none());
    }

    #[test]
    fn test_format_choices() {
        let options = parse(&["texdrop", "a.png", "-f", "toml"]).unwrap();
        assert_eq!(options.format, OutputFormat::Toml);
        assert!(parse(&["texdrop", "a.png", "-f", "json"]).is_err());
    }
}
