//! Host boundary
//!
//! The core never builds materials. It hands the host an [`ApplyPlan`]: which
//! file feeds which input, in which color space, and what to call a material
//! the host has to create. Hosts implement [`TextureSetHost`] to act on it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::role::Role;
use crate::set::{BaseName, TextureSet};

/// How a texture's pixels are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpace {
    /// Gamma-encoded color
    Srgb,
    /// Linear data (masks, roughness, normals)
    NonColor,
}

impl ColorSpace {
    /// Color space a texture in `role` should be read with
    pub fn for_role(role: Role) -> Self {
        if role.is_color_data() {
            ColorSpace::Srgb
        } else {
            ColorSpace::NonColor
        }
    }
}

/// Which files of a resolution get applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyMode {
    /// Every role of the texture set
    #[default]
    Smart,
    /// Only the dropped file, bound to the given role
    Single(Role),
}

/// One texture to bind to a material input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureBinding {
    /// Material input
    pub role: Role,
    /// Image file
    pub path: PathBuf,
    /// How the image is read
    pub color_space: ColorSpace,
    /// Whether the image feeds the input through a normal map conversion
    pub via_normal_map: bool,
}

impl TextureBinding {
    /// Binding for `path` in `role`
    pub fn new(role: Role, path: impl Into<PathBuf>) -> Self {
        Self {
            role,
            path: path.into(),
            color_space: ColorSpace::for_role(role),
            via_normal_map: role == Role::Normal,
        }
    }
}

/// Everything a host needs to apply a resolved texture set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyPlan {
    /// Mode the plan was made for
    pub mode: ApplyMode,
    /// Raw base name of the set
    pub base_name: BaseName,
    /// Name for a material the host creates when the target has none
    pub material_name: String,
    /// Bindings in layout order
    pub bindings: Vec<TextureBinding>,
}

impl ApplyPlan {
    /// Plan every role of `texture_set`
    pub fn smart(texture_set: &TextureSet, base_name: &BaseName, default_label: &str) -> Self {
        Self {
            mode: ApplyMode::Smart,
            base_name: base_name.clone(),
            material_name: base_name.material_label(default_label),
            bindings: texture_set
                .iter()
                .map(|(role, path)| TextureBinding::new(role, path))
                .collect(),
        }
    }

    /// Plan only the dropped file, bound to `role`
    pub fn single(role: Role, dropped_path: &Path, base_name: &BaseName, default_label: &str) -> Self {
        Self {
            mode: ApplyMode::Single(role),
            base_name: base_name.clone(),
            material_name: base_name.material_label(default_label),
            bindings: vec![TextureBinding::new(role, dropped_path)],
        }
    }

    /// Plan according to `mode`
    pub fn new(
        mode: ApplyMode,
        texture_set: &TextureSet,
        base_name: &BaseName,
        dropped_path: &Path,
        default_label: &str,
    ) -> Self {
        match mode {
            ApplyMode::Smart => Self::smart(texture_set, base_name, default_label),
            ApplyMode::Single(role) => Self::single(role, dropped_path, base_name, default_label),
        }
    }

    /// Binding for `role`, if planned
    pub fn binding(&self, role: Role) -> Option<&TextureBinding> {
        self.bindings.iter().find(|binding| binding.role == role)
    }
}

/// Host side of the boundary
///
/// Implemented by whatever owns materials (an editor, a scene loader, a CLI
/// report). The resolver produces plans and never calls this itself.
pub trait TextureSetHost {
    /// Object receiving the textures
    type Target: ?Sized;
    /// Host failure
    type Error;

    /// Apply `plan` to `target`
    fn apply_texture_set(&mut self, plan: &ApplyPlan, target: &mut Self::Target) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> TextureSet {
        let mut set = TextureSet::new();
        set.insert_if_vacant(Role::Normal, "/t/wood_normal.png");
        set.insert_if_vacant(Role::BaseColor, "/t/wood_basecolor.png");
        set.insert_if_vacant(Role::Roughness, "/t/wood_roughness.png");
        set
    }

    #[test]
    fn test_smart_plan_layout_and_color_spaces() {
        let plan = ApplyPlan::smart(&sample_set(), &BaseName::new("old_wood"), "Material");

        assert_eq!(plan.material_name, "Old Wood");
        let roles: Vec<_> = plan.bindings.iter().map(|b| b.role).collect();
        assert_eq!(roles, [Role::BaseColor, Role::Roughness, Role::Normal]);

        let color = plan.binding(Role::BaseColor).unwrap();
        assert_eq!(color.color_space, ColorSpace::Srgb);
        assert!(!color.via_normal_map);

        let normal = plan.binding(Role::Normal).unwrap();
        assert_eq!(normal.color_space, ColorSpace::NonColor);
        assert!(normal.via_normal_map);

        let rough = plan.binding(Role::Roughness).unwrap();
        assert_eq!(rough.color_space, ColorSpace::NonColor);
        assert!(!rough.via_normal_map);
    }

    #[test]
    fn test_single_plan_uses_dropped_file_only() {
        let plan = ApplyPlan::new(
            ApplyMode::Single(Role::Metallic),
            &sample_set(),
            &BaseName::new("wood"),
            Path::new("/t/wood_normal.png"),
            "Material",
        );

        assert_eq!(plan.mode, ApplyMode::Single(Role::Metallic));
        assert_eq!(plan.bindings.len(), 1);
        assert_eq!(plan.bindings[0].role, Role::Metallic);
        assert_eq!(plan.bindings[0].path, PathBuf::from("/t/wood_normal.png"));
        assert_eq!(plan.bindings[0].color_space, ColorSpace::NonColor);
    }

    #[test]
    fn test_empty_base_name_uses_default_label() {
        let plan = ApplyPlan::smart(&sample_set(), &BaseName::new(""), "material");
        assert_eq!(plan.material_name, "Material");
    }

    struct RecordingHost {
        applied: Vec<String>,
    }

    impl TextureSetHost for RecordingHost {
        type Target = String;
        type Error = std::convert::Infallible;

        fn apply_texture_set(&mut self, plan: &ApplyPlan, target: &mut String) -> Result<(), Self::Error> {
            target.push_str(&plan.material_name);
            self.applied.extend(plan.bindings.iter().map(|b| b.role.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_host_receives_plan() {
        let mut host = RecordingHost { applied: Vec::new() };
        let mut target = String::new();
        let plan = ApplyPlan::smart(&sample_set(), &BaseName::new("wood"), "Material");

        host.apply_texture_set(&plan, &mut target).unwrap();
        assert_eq!(target, "Wood");
        assert_eq!(host.applied, ["Base Color", "Roughness", "Normal"]);
    }
}
