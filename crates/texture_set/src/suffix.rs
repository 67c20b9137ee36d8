//! Suffix classifier
//!
//! Maps a filename stem to a [`Role`] by its ending. Matching is a plain,
//! case-insensitive `ends_with` over the known suffixes, longest first, so
//! `_metalnessmask` is tested before `_metal`. There is no delimiter
//! anchoring: a stem that merely ends in the letters of a suffix matches it.

use std::sync::OnceLock;

use crate::listing::split_extension;
use crate::role::Role;

/// Image extensions recognized by default
pub const IMAGE_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".bmp", ".tiff", ".tga"];

/// Default role-bearing suffixes
pub const ROLE_SUFFIXES: [(&str, Role); 8] = [
    ("_normal", Role::Normal),
    ("_nrm", Role::Normal),
    ("_normalgl", Role::Normal),
    ("_metallic", Role::Metallic),
    ("_metal", Role::Metallic),
    ("_metalnessmask", Role::Metallic),
    ("_roughness", Role::Roughness),
    ("_rough", Role::Roughness),
];

/// Default suffixes that explicitly mark a base color map
pub const BASE_COLOR_SUFFIXES: [&str; 5] = ["_color", "_albedo", "_diffuse", "_basecolor", "_col"];

/// Which group of the table a suffix matched in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixMatch<'a> {
    /// A role-bearing suffix
    Role {
        /// Matched suffix (lowercase)
        suffix: &'a str,
        /// Role the suffix maps to
        role: Role,
    },
    /// An explicit base color suffix
    BaseColor {
        /// Matched suffix (lowercase)
        suffix: &'a str,
    },
}

impl SuffixMatch<'_> {
    /// Role implied by the match
    pub fn role(&self) -> Role {
        match *self {
            SuffixMatch::Role { role, .. } => role,
            SuffixMatch::BaseColor { .. } => Role::BaseColor,
        }
    }

    /// Matched suffix text
    pub fn suffix(&self) -> &str {
        match *self {
            SuffixMatch::Role { suffix, .. } | SuffixMatch::BaseColor { suffix } => suffix,
        }
    }
}

/// Ordered suffix lookup data
///
/// Both groups are stored lowercase and sorted by length, longest first.
/// Equal-length suffixes keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixTable {
    role_suffixes: Vec<(String, Role)>,
    base_color_suffixes: Vec<String>,
    /// Both groups merged, for base name derivation
    all_suffixes: Vec<String>,
}

impl SuffixTable {
    /// Build a table from role-bearing and base color suffixes
    ///
    /// Suffixes are lowercased. Empty suffixes are ignored since they would
    /// match every stem.
    pub fn new<R, B, S, T>(role_suffixes: R, base_color_suffixes: B) -> Self
    where
        R: IntoIterator<Item = (S, Role)>,
        B: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut role_suffixes: Vec<(String, Role)> = role_suffixes
            .into_iter()
            .map(|(suffix, role)| (suffix.as_ref().to_lowercase(), role))
            .filter(|(suffix, _)| !suffix.is_empty())
            .collect();
        let mut base_color_suffixes: Vec<String> = base_color_suffixes
            .into_iter()
            .map(|suffix| suffix.as_ref().to_lowercase())
            .filter(|suffix| !suffix.is_empty())
            .collect();

        let mut all_suffixes: Vec<String> = role_suffixes
            .iter()
            .map(|(suffix, _)| suffix.clone())
            .chain(base_color_suffixes.iter().cloned())
            .collect();

        role_suffixes.sort_by(|a, b| char_len(&b.0).cmp(&char_len(&a.0)));
        base_color_suffixes.sort_by(|a, b| char_len(b).cmp(&char_len(a)));
        all_suffixes.sort_by(|a, b| char_len(b).cmp(&char_len(a)));

        Self {
            role_suffixes,
            base_color_suffixes,
            all_suffixes,
        }
    }

    /// The built-in table, built once and shared
    pub fn standard() -> &'static SuffixTable {
        static STANDARD: OnceLock<SuffixTable> = OnceLock::new();
        STANDARD.get_or_init(|| SuffixTable::new(ROLE_SUFFIXES, BASE_COLOR_SUFFIXES))
    }

    /// Role-bearing suffixes, longest first
    pub fn role_suffixes(&self) -> impl Iterator<Item = (&str, Role)> + '_ {
        self.role_suffixes.iter().map(|(suffix, role)| (suffix.as_str(), *role))
    }

    /// Base color suffixes, longest first
    pub fn base_color_suffixes(&self) -> impl Iterator<Item = &str> + '_ {
        self.base_color_suffixes.iter().map(String::as_str)
    }

    /// Find the suffix a stem ends with
    ///
    /// Role-bearing suffixes are tried before base color suffixes.
    pub fn find_match(&self, stem: &str) -> Option<SuffixMatch<'_>> {
        let lower = stem.to_lowercase();

        if let Some((suffix, role)) = self
            .role_suffixes
            .iter()
            .find(|(suffix, _)| lower.ends_with(suffix.as_str()))
        {
            return Some(SuffixMatch::Role {
                suffix: suffix.as_str(),
                role: *role,
            });
        }

        self.base_color_suffixes
            .iter()
            .find(|suffix| lower.ends_with(suffix.as_str()))
            .map(|suffix| SuffixMatch::BaseColor {
                suffix: suffix.as_str(),
            })
    }

    /// Classify a filename stem (no extension)
    ///
    /// Total over all inputs: anything without a role-bearing suffix is
    /// treated as a base color map.
    pub fn classify(&self, stem: &str) -> Role {
        self.find_match(stem)
            .map_or(Role::BaseColor, |found| found.role())
    }

    /// Classify a full filename, extension included
    pub fn classify_filename(&self, filename: &str) -> Role {
        self.classify(split_extension(filename).0)
    }

    /// Remove the longest known suffix from a stem
    ///
    /// Case is preserved in the result. A stem with no known suffix is
    /// returned whole.
    pub fn strip_known_suffix<'s>(&self, stem: &'s str) -> &'s str {
        let lower = stem.to_lowercase();
        match self
            .all_suffixes
            .iter()
            .find(|suffix| lower.ends_with(suffix.as_str()))
        {
            Some(suffix) => trim_chars_end(stem, char_len(suffix)),
            None => stem,
        }
    }
}

impl Default for SuffixTable {
    fn default() -> Self {
        SuffixTable::standard().clone()
    }
}

/// Classify a filename stem with the built-in table
pub fn classify(filename_no_ext: &str) -> Role {
    SuffixTable::standard().classify(filename_no_ext)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Drop the last `count` characters of `s`
fn trim_chars_end(s: &str, count: usize) -> &str {
    if count == 0 {
        return s;
    }
    match s.char_indices().rev().nth(count - 1) {
        Some((start, _)) => &s[..start],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_total() {
        assert_eq!(classify(""), Role::BaseColor);
        assert_eq!(classify("wood"), Role::BaseColor);
        assert_eq!(classify("_"), Role::BaseColor);
        assert_eq!(classify("wood_normal.png"), Role::BaseColor);
        assert_eq!(classify("ünïcødé"), Role::BaseColor);
    }

    #[test]
    fn test_longest_suffix_wins() {
        assert_eq!(classify("x_metalnessmask"), Role::Metallic);
        assert_eq!(classify("x_metal"), Role::Metallic);
        assert_eq!(classify("x_normalgl"), Role::Normal);
        assert_eq!(classify("x_roughness"), Role::Roughness);
        assert_eq!(classify("x_rough"), Role::Roughness);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("X_NORMAL"), Role::Normal);
        assert_eq!(classify("x_normal"), Role::Normal);
        assert_eq!(classify("Brick_Nrm"), Role::Normal);
    }

    #[test]
    fn test_base_color_suffixes() {
        for stem in ["a_color", "a_albedo", "a_diffuse", "a_basecolor", "a_col"] {
            assert_eq!(classify(stem), Role::BaseColor, "{}", stem);
        }
        let table = SuffixTable::standard();
        assert!(matches!(
            table.find_match("wood_basecolor"),
            Some(SuffixMatch::BaseColor { suffix: "_basecolor" })
        ));
        assert_eq!(table.find_match("wood"), None);
    }

    #[test]
    fn test_role_suffix_beats_base_color_suffix() {
        let table = SuffixTable::standard();
        let found = table.find_match("steel_metal").unwrap();
        assert_eq!(found.role(), Role::Metallic);
        assert_eq!(found.suffix(), "_metal");
    }

    #[test]
    fn test_suffix_matching_ignores_word_boundaries() {
        // The underscore is part of the suffix, nothing before it is checked
        assert_eq!(classify("gunmetal"), Role::BaseColor);
        assert_eq!(classify("gun_metal"), Role::Metallic);
        assert_eq!(classify("tile_supernormal"), Role::BaseColor);
        // A color map whose name happens to end like a suffix is taken by it
        assert_eq!(classify("band_heavy_metal"), Role::Metallic);
        assert_eq!(SuffixTable::standard().strip_known_suffix("old_col"), "old");
    }

    #[test]
    fn test_classify_filename_strips_extension() {
        let table = SuffixTable::standard();
        assert_eq!(table.classify_filename("brick_normal.png"), Role::Normal);
        assert_eq!(table.classify_filename("brick_rough.TGA"), Role::Roughness);
        assert_eq!(table.classify_filename("brick.png"), Role::BaseColor);
    }

    #[test]
    fn test_strip_known_suffix() {
        let table = SuffixTable::standard();
        assert_eq!(table.strip_known_suffix("Wood_Normal"), "Wood");
        assert_eq!(table.strip_known_suffix("wood_metalnessmask"), "wood");
        assert_eq!(table.strip_known_suffix("wood_BaseColor"), "wood");
        assert_eq!(table.strip_known_suffix("wood"), "wood");
        assert_eq!(table.strip_known_suffix("_col"), "");
    }

    #[test]
    fn test_strip_round_trip_every_suffix() {
        let table = SuffixTable::standard();
        let suffixes = ROLE_SUFFIXES
            .iter()
            .map(|(suffix, _)| *suffix)
            .chain(BASE_COLOR_SUFFIXES);
        for suffix in suffixes {
            let stem = format!("Old-Oak{}", suffix);
            assert_eq!(table.strip_known_suffix(&stem), "Old-Oak", "{}", suffix);
        }
    }

    #[test]
    fn test_custom_table() {
        let table = SuffixTable::new([("_N", Role::Normal), ("", Role::Metallic)], ["_D"]);
        assert_eq!(table.role_suffixes().collect::<Vec<_>>(), [("_n", Role::Normal)]);
        assert_eq!(table.base_color_suffixes().collect::<Vec<_>>(), ["_d"]);
        assert_eq!(table.classify("rock_n"), Role::Normal);
        assert_eq!(table.strip_known_suffix("rock_D"), "rock");
    }

    #[test]
    fn test_tables_sorted_longest_first() {
        let table = SuffixTable::standard();
        let lengths: Vec<_> = table.role_suffixes().map(|(s, _)| s.len()).collect();
        assert!(lengths.windows(2).all(|pair| pair[0] >= pair[1]));
        assert_eq!(table.role_suffixes().next(), Some(("_metalnessmask", Role::Metallic)));
    }

    #[test]
    fn test_trim_chars_end() {
        assert_eq!(trim_chars_end("héllo", 2), "hél");
        assert_eq!(trim_chars_end("ab", 5), "");
        assert_eq!(trim_chars_end("ab", 0), "ab");
    }
}
