//! Console host
//!
//! Stands in for a material editor: applies plans to an in-memory material
//! slot and reports the result.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use texture_set::{ApplyMode, ApplyPlan, ColorSpace, TextureBinding, TextureSetHost};

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// RON document
    Ron,
    /// TOML document
    Toml,
}

/// Material of the object receiving the textures
#[derive(Debug, Clone, Default)]
pub struct MaterialSlot {
    /// Material name, `None` while the object has no material
    pub material: Option<String>,
    /// Connected inputs, one per role
    pub inputs: Vec<TextureBinding>,
}

impl MaterialSlot {
    /// Slot already holding a material
    pub fn with_material(name: impl Into<String>) -> Self {
        Self {
            material: Some(name.into()),
            inputs: Vec::new(),
        }
    }

    /// Connect a binding, replacing any existing input for the same role
    pub fn connect(&mut self, binding: TextureBinding) {
        match self.inputs.iter_mut().find(|input| input.role == binding.role) {
            Some(existing) => *existing = binding,
            None => self.inputs.push(binding),
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    material: &'a str,
    created_material: bool,
    plan: &'a ApplyPlan,
}

/// Host that writes what it applied to `out`
pub struct ConsoleHost<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> ConsoleHost<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    fn write_text(&mut self, report: &Report<'_>) -> Result<()> {
        let created = if report.created_material { " (created)" } else { "" };
        writeln!(self.out, "Material: {}{}", report.material, created)?;

        for binding in &report.plan.bindings {
            let color_space = match binding.color_space {
                ColorSpace::Srgb => "sRGB",
                ColorSpace::NonColor => "Non-Color",
            };
            let via = if binding.via_normal_map { ", normal map" } else { "" };
            writeln!(
                self.out,
                "  {:<10} <- {} [{}{}]",
                binding.role.label(),
                binding.path.display(),
                color_space,
                via
            )?;
        }

        match report.plan.mode {
            ApplyMode::Single(role) => writeln!(self.out, "Texture applied to the '{}' input.", role)?,
            ApplyMode::Smart => writeln!(self.out, "Texture set '{}' applied.", report.plan.base_name)?,
        }
        Ok(())
    }
}

impl<W: Write> TextureSetHost for ConsoleHost<W> {
    type Target = MaterialSlot;
    type Error = anyhow::Error;

    fn apply_texture_set(&mut self, plan: &ApplyPlan, target: &mut MaterialSlot) -> Result<()> {
        let created_material = target.material.is_none();
        let material = target
            .material
            .get_or_insert_with(|| plan.material_name.clone())
            .clone();

        for binding in &plan.bindings {
            target.connect(binding.clone());
        }
        log::debug!("Connected {} input(s) on material '{}'", plan.bindings.len(), material);

        let report = Report {
            material: &material,
            created_material,
            plan,
        };

        match self.format {
            OutputFormat::Text => self.write_text(&report)?,
            OutputFormat::Ron => {
                let text = ron::ser::to_string_pretty(&report, Default::default())
                    .context("Failed to serialize report as RON")?;
                writeln!(self.out, "{}", text)?;
            }
            OutputFormat::Toml => {
                let text = toml::to_string_pretty(&report).context("Failed to serialize report as TOML")?;
                write!(self.out, "{}", text)?;
            }
        }
        Ok(())
    }
}
