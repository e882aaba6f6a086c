//! G-code command values and text formatting.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

/// A single G-code command: a letter, a code number, and single-letter
/// parameters.
///
/// Parameters render in letter order (a `BTreeMap`), so formatting is
/// deterministic: `G1 E0.4 F1500 X10 Y20`.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    letter: char,
    code: u32,
    parameters: BTreeMap<char, f64>,
}

impl Command {
    fn new(letter: char, code: u32, parameters: impl IntoIterator<Item = (char, f64)>) -> Self {
        Self {
            letter,
            code,
            parameters: parameters.into_iter().collect(),
        }
    }

    /// `G0` rapid move to `(x, y)` at feedrate `f`.
    pub fn rapid(f: f64, x: f64, y: f64) -> Self {
        Self::new('G', 0, [('F', f), ('X', x), ('Y', y)])
    }

    /// `G1` extruding move to `(x, y)` at feedrate `f`, extruding to `e`.
    pub fn linear(e: f64, f: f64, x: f64, y: f64) -> Self {
        Self::new('G', 1, [('E', e), ('F', f), ('X', x), ('Y', y)])
    }

    /// `G10` firmware retract.
    pub fn retract() -> Self {
        Self::new('G', 10, [])
    }

    /// `G11` undo the firmware retract.
    pub fn unretract() -> Self {
        Self::new('G', 11, [])
    }

    /// `G92` reset the given coordinate to `value` without moving.
    pub fn reset_coordinate(axis: char, value: f64) -> Self {
        Self::new('G', 92, [(axis, value)])
    }

    /// `G82` switch the extruder to absolute distances.
    pub fn absolute_extrusion() -> Self {
        Self::new('G', 82, [])
    }

    /// `M106` part cooling fan on at PWM duty `s`.
    pub fn fan_on(s: f64) -> Self {
        Self::new('M', 106, [('S', s)])
    }

    /// `M107` part cooling fan off.
    pub fn fan_off() -> Self {
        Self::new('M', 107, [])
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.code)?;
        for (parameter, value) in &self.parameters {
            write!(f, " {parameter}{value}")?;
        }
        Ok(())
    }
}

/// Write commands one per line.
pub fn write_commands<W: Write>(writer: &mut W, commands: &[Command]) -> io::Result<()> {
    for command in commands {
        writeln!(writer, "{command}")?;
    }
    Ok(())
}
