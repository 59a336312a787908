//! Motion path marshalling
//!
//! A path is an ordered sequence of typed waypoints with variable-length
//! parameter lists. The C boundary cannot carry such a structure, so it is
//! flattened into parallel arrays: one move-type code, one position-type
//! code, and one parameter count per entry, plus a single concatenation of
//! all parameters in entry order. Unflattening walks the count array and
//! consumes parameters from the flat array; every read is validated against
//! the declared total before it happens, so a malformed count array is
//! refused before anything reaches the controller.

use crate::enums::{MoveType, PositionType};
use crate::{BridgeError, Result};

/// One waypoint of a motion path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEntry {
    pub move_type: MoveType,
    pub position_type: PositionType,
    /// Pose (6 values) followed by move-type-specific parameters such as
    /// velocity, acceleration, and blend radius.
    pub parameters: Vec<f64>,
}

/// An ordered motion plan executed as one unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub entries: Vec<PathEntry>,
}

impl Path {
    pub fn new() -> Self {
        Path::default()
    }

    pub fn add_entry(&mut self, entry: PathEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The flat-array representation of a [`Path`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatPath {
    pub move_types: Vec<i32>,
    pub position_types: Vec<i32>,
    pub parameter_counts: Vec<i32>,
    pub parameters: Vec<f64>,
}

/// Flatten a path into parallel arrays plus per-entry parameter counts.
pub fn flatten(path: &Path) -> FlatPath {
    let mut flat = FlatPath {
        move_types: Vec::with_capacity(path.len()),
        position_types: Vec::with_capacity(path.len()),
        parameter_counts: Vec::with_capacity(path.len()),
        parameters: Vec::new(),
    };

    for entry in &path.entries {
        flat.move_types.push(entry.move_type.code());
        flat.position_types.push(entry.position_type.code());
        flat.parameter_counts.push(entry.parameters.len() as i32);
        flat.parameters.extend_from_slice(&entry.parameters);
    }

    flat
}

/// Rebuild a path from its flat-array representation.
///
/// The per-entry arrays must have equal length, every count must be
/// non-negative, and the counts must sum exactly to `parameters.len()`.
pub fn unflatten(
    move_types: &[i32],
    position_types: &[i32],
    parameter_counts: &[i32],
    parameters: &[f64],
) -> Result<Path> {
    if move_types.len() != position_types.len() || move_types.len() != parameter_counts.len() {
        return Err(BridgeError::Contract(format!(
            "per-entry arrays disagree on entry count: {} move types, {} position types, {} counts",
            move_types.len(),
            position_types.len(),
            parameter_counts.len()
        )));
    }

    let mut path = Path::new();
    let mut offset = 0usize;

    for (i, (&move_code, &position_code)) in
        move_types.iter().zip(position_types.iter()).enumerate()
    {
        let move_type = MoveType::from_code(move_code)?;
        let position_type = PositionType::from_code(position_code)?;

        let count = parameter_counts[i];
        if count < 0 {
            return Err(BridgeError::Contract(format!(
                "entry {} declares negative parameter count {}",
                i, count
            )));
        }
        let count = count as usize;

        if offset + count > parameters.len() {
            return Err(BridgeError::Contract(format!(
                "entry {} consumes parameters {}..{} but only {} were supplied",
                i,
                offset,
                offset + count,
                parameters.len()
            )));
        }

        path.add_entry(PathEntry {
            move_type,
            position_type,
            parameters: parameters[offset..offset + count].to_vec(),
        });
        offset += count;
    }

    if offset != parameters.len() {
        return Err(BridgeError::Contract(format!(
            "parameter counts consume {} values but {} were supplied",
            offset,
            parameters.len()
        )));
    }

    Ok(path)
}
