//! Material channel roles
//!
//! A role names the material input a texture file feeds. The set is closed;
//! new filename conventions extend the suffix table, not this enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Material channel a texture maps to
///
/// Declaration order is the layout order hosts use when placing texture
/// inputs, so `Ord` and iteration over [`Role::ALL`] agree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Albedo / diffuse color
    #[default]
    BaseColor,
    /// Metalness mask
    Metallic,
    /// Microsurface roughness
    Roughness,
    /// Tangent-space normal map
    Normal,
}

impl Role {
    /// All roles in layout order
    pub const ALL: [Role; 4] = [Role::BaseColor, Role::Metallic, Role::Roughness, Role::Normal];

    /// Host-facing socket label ("Base Color", "Normal", ...)
    pub fn label(self) -> &'static str {
        match self {
            Role::BaseColor => "Base Color",
            Role::Metallic => "Metallic",
            Role::Roughness => "Roughness",
            Role::Normal => "Normal",
        }
    }

    /// Whether the texture carries color data (sRGB) rather than raw values
    pub fn is_color_data(self) -> bool {
        matches!(self, Role::BaseColor)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known role
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown texture role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Accepts labels and identifiers alike: `Base Color`, `base_color`,
    /// `basecolor`, `NORMAL`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "basecolor" => Ok(Role::BaseColor),
            "metallic" => Ok(Role::Metallic),
            "roughness" => Ok(Role::Roughness),
            "normal" => Ok(Role::Normal),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_order() {
        let mut roles = vec![Role::Normal, Role::BaseColor, Role::Roughness, Role::Metallic];
        roles.sort();
        assert_eq!(roles, Role::ALL.to_vec());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Role::BaseColor.label(), "Base Color");
        assert_eq!(Role::Normal.to_string(), "Normal");
    }

    #[test]
    fn test_parse_role() {
        assert_eq!("Base Color".parse::<Role>(), Ok(Role::BaseColor));
        assert_eq!("base_color".parse::<Role>(), Ok(Role::BaseColor));
        assert_eq!("ROUGHNESS".parse::<Role>(), Ok(Role::Roughness));
        assert_eq!("metallic".parse::<Role>(), Ok(Role::Metallic));
        assert!("emission".parse::<Role>().is_err());
    }

    #[test]
    fn test_color_data() {
        assert!(Role::BaseColor.is_color_data());
        assert!(!Role::Normal.is_color_data());
        assert!(!Role::Roughness.is_color_data());
    }
}
