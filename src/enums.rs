//! Integer-code enumerations crossing the C boundary
//!
//! The foreign caller can only pass small integers; the underlying
//! libraries take strongly-typed enumerations. Each type here maps its
//! documented code range exhaustively in both directions. A code outside
//! the range is a caller bug and is rejected, never defaulted: guessing a
//! motion type could command unintended robot movement.

use crate::{BridgeError, Result};

/// Motion primitive used by a path waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveType {
    MoveJ = 0,
    MoveL = 1,
    MoveP = 2,
    MoveC = 3,
}

impl MoveType {
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(MoveType::MoveJ),
            1 => Ok(MoveType::MoveL),
            2 => Ok(MoveType::MoveP),
            3 => Ok(MoveType::MoveC),
            _ => Err(BridgeError::Contract(format!(
                "move type code {} outside 0..=3",
                code
            ))),
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Interpretation of a waypoint's first six parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionType {
    TcpPose = 0,
    Joints = 1,
}

impl PositionType {
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(PositionType::TcpPose),
            1 => Ok(PositionType::Joints),
            _ => Err(BridgeError::Contract(format!(
                "position type code {} outside 0..=1",
                code
            ))),
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Whether a gripper motion command returns at admission or at motion end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMode {
    StartMove = 0,
    WaitFinished = 1,
}

impl MoveMode {
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(MoveMode::StartMove),
            1 => Ok(MoveMode::WaitFinished),
            _ => Err(BridgeError::Contract(format!(
                "move mode code {} outside 0..=1",
                code
            ))),
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Target direction for an emergency release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionId {
    Open = 0,
    Close = 1,
}

impl PositionId {
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(PositionId::Open),
            1 => Ok(PositionId::Close),
            _ => Err(BridgeError::Contract(format!(
                "position id code {} outside 0..=1",
                code
            ))),
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Gripper command channel whose unit is being configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveParameter {
    Position = 0,
    Speed = 1,
    Force = 2,
}

impl MoveParameter {
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(MoveParameter::Position),
            1 => Ok(MoveParameter::Speed),
            2 => Ok(MoveParameter::Force),
            _ => Err(BridgeError::Contract(format!(
                "move parameter code {} outside 0..=2",
                code
            ))),
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Unit in which a gripper command channel is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Device = 0,
    Normalized = 1,
    Percent = 2,
    Mm = 3,
}

impl Unit {
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Unit::Device),
            1 => Ok(Unit::Normalized),
            2 => Ok(Unit::Percent),
            3 => Ok(Unit::Mm),
            _ => Err(BridgeError::Contract(format!(
                "unit code {} outside 0..=3",
                code
            ))),
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Gripper object-detection state.
///
/// This enumeration has no error member; `AtDest` doubles as the documented
/// degraded-mode fallback when a status query cannot reach a live gripper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectStatus {
    Moving = 0,
    StoppedOuterObject = 1,
    StoppedInnerObject = 2,
    AtDest = 3,
}

impl ObjectStatus {
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(ObjectStatus::Moving),
            1 => Ok(ObjectStatus::StoppedOuterObject),
            2 => Ok(ObjectStatus::StoppedInnerObject),
            3 => Ok(ObjectStatus::AtDest),
            _ => Err(BridgeError::Contract(format!(
                "object status code {} outside 0..=3",
                code
            ))),
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}
