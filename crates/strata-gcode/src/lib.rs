#![warn(missing_docs)]

//! G-code scaffolding for the strata slicer.
//!
//! This crate covers the machine-facing side of the pipeline: the
//! [`Command`] value type with its text formatting, machine and
//! print-settings configuration loaded from JSON, and the
//! [`generate_gcode`] entry point consuming sliced layers.
//!
//! Toolpath generation itself (travel planning, extrusion amounts,
//! retraction strategy) is out of scope: [`generate_gcode`] is a stub that
//! emits no commands.

pub mod command;
pub mod error;
pub mod printer;

pub use command::{write_commands, Command};
pub use error::{ConfigError, Result};
pub use printer::{Adhesion, Machine, PrintSettings};

use strata_slicer::Polygon;

/// Generate movement and extrusion commands for a stack of sliced layers.
///
/// Not implemented: returns no commands. The signature is the stable part
/// of the interface; callers hand over the layers bottom-to-top along
/// with the machine profile and print settings.
pub fn generate_gcode(
    layers: &[Polygon],
    machine: &Machine,
    settings: &PrintSettings,
) -> Vec<Command> {
    let _ = (layers, machine, settings);
    Vec::new()
}
