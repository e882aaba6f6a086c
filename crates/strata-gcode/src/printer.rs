//! Machine and print-settings configuration.
//!
//! Both structs load from JSON files with camelCase keys, e.g.:
//!
//! ```json
//! {
//!     "name": "Generic 220",
//!     "bedX": 220.0, "bedY": 220.0, "bedZ": 250.0,
//!     "headXmin": -20.0, "headXmax": 10.0,
//!     "headYmin": -10.0, "headYmax": 10.0,
//!     "gantryHeight": 25.0
//! }
//! ```

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strata_math::{Vec2, Vec3};

use crate::error::Result;

/// Printer hardware description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    /// Machine name.
    pub name: String,
    /// Build volume X (mm).
    pub bed_x: f64,
    /// Build volume Y (mm).
    pub bed_y: f64,
    /// Build volume Z (mm).
    pub bed_z: f64,
    /// Print head clearance, minimum X offset from the nozzle (mm).
    pub head_xmin: f64,
    /// Print head clearance, maximum X offset from the nozzle (mm).
    pub head_xmax: f64,
    /// Print head clearance, minimum Y offset from the nozzle (mm).
    pub head_ymin: f64,
    /// Print head clearance, maximum Y offset from the nozzle (mm).
    pub head_ymax: f64,
    /// Height of the gantry above the nozzle tip (mm).
    pub gantry_height: f64,
    /// Is the origin at the bed center rather than a corner?
    #[serde(default)]
    pub origin_at_center: bool,
    /// Is the bed heated?
    #[serde(default)]
    pub heated_bed: bool,
    /// Raw G-code emitted before a print.
    #[serde(default)]
    pub start_gcode: String,
    /// Raw G-code emitted after a print.
    #[serde(default)]
    pub end_gcode: String,
}

impl Machine {
    /// A generic 220 mm bed-slinger profile.
    pub fn generic() -> Self {
        Self {
            name: "Generic".into(),
            bed_x: 220.0,
            bed_y: 220.0,
            bed_z: 250.0,
            head_xmin: -20.0,
            head_xmax: 10.0,
            head_ymin: -10.0,
            head_ymax: 10.0,
            gantry_height: 25.0,
            origin_at_center: false,
            heated_bed: true,
            start_gcode: String::new(),
            end_gcode: String::new(),
        }
    }

    /// Load a machine profile from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::generic()
    }
}

/// Bed adhesion aid printed around or under the first layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Adhesion {
    /// No adhesion aid.
    #[default]
    None,
    /// A loop of filament around the part, priming the nozzle.
    Skirt,
    /// Extra first-layer rings attached to the part.
    Brim,
    /// A sacrificial lattice under the part.
    Raft,
}

/// Per-print settings, including the slicing plane frame.
///
/// Every field has a default, so a settings file only needs to name what
/// it overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PrintSettings {
    /// Part placement on the bed (mm).
    pub position: Vec2,
    /// Slicing direction: the layer plane normal.
    pub direction: Vec3,
    /// In-plane x-axis of the layer frame.
    pub tangent: Vec3,
    /// Layer height (mm).
    pub layer_height: f64,
    /// Infill density, 0 to 1.
    pub infill: f64,
    /// Uniform part scale factor.
    pub scale: f64,
    /// Bed adhesion aid.
    pub adhesion: Adhesion,
}

impl PrintSettings {
    /// Load print settings from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            direction: Vec3::z(),
            tangent: Vec3::x(),
            layer_height: 0.1,
            infill: 0.1,
            scale: 1.0,
            adhesion: Adhesion::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_machine_json_keys() {
        let json = r#"{
            "name": "Test Machine",
            "bedX": 200.0, "bedY": 210.0, "bedZ": 220.0,
            "headXmin": -5.0, "headXmax": 5.0,
            "headYmin": -4.0, "headYmax": 4.0,
            "gantryHeight": 30.0,
            "heatedBed": true
        }"#;
        let machine: Machine = serde_json::from_str(json).unwrap();
        assert_eq!(machine.name, "Test Machine");
        assert_relative_eq!(machine.bed_y, 210.0);
        assert_relative_eq!(machine.gantry_height, 30.0);
        assert!(machine.heated_bed);
        // Omitted fields with C-side defaults.
        assert!(!machine.origin_at_center);
        assert_eq!(machine.start_gcode, "");
    }

    #[test]
    fn test_machine_missing_required_field() {
        let json = r#"{ "name": "broken" }"#;
        assert!(serde_json::from_str::<Machine>(json).is_err());
    }

    #[test]
    fn test_machine_roundtrip() {
        let machine = Machine::generic();
        let json = serde_json::to_string(&machine).unwrap();
        assert!(json.contains("\"bedX\""));
        let back: Machine = serde_json::from_str(&json).unwrap();
        assert_eq!(back, machine);
    }

    #[test]
    fn test_print_settings_defaults() {
        let settings: PrintSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, PrintSettings::default());
        assert_relative_eq!(settings.direction.z, 1.0);
        assert_relative_eq!(settings.layer_height, 0.1);
        assert_eq!(settings.adhesion, Adhesion::None);
    }

    #[test]
    fn test_print_settings_overrides() {
        let json = r#"{
            "layerHeight": 0.3,
            "direction": [1.0, 0.0, 0.0],
            "adhesion": "Brim"
        }"#;
        let settings: PrintSettings = serde_json::from_str(json).unwrap();
        assert_relative_eq!(settings.layer_height, 0.3);
        assert_relative_eq!(settings.direction.x, 1.0);
        assert_eq!(settings.adhesion, Adhesion::Brim);
        // Untouched fields keep their defaults.
        assert_relative_eq!(settings.scale, 1.0);
    }
}
