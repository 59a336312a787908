//! Construction seam for the external interfaces
//!
//! The bridge never constructs controller objects itself; it asks a
//! [`Connector`] installed by the embedding process. Construction returns
//! a discriminated result so that a connection failure surfaces as a typed
//! error at the boundary (and a null handle to the foreign caller) instead
//! of an unwind.

use crate::config::{ConnectOptions, GripperOptions};
use crate::control::ControlInterface;
use crate::gripper::GripperController;
use crate::receive::ReceiveInterface;
use crate::Result;

/// Factory for the three external interface kinds.
pub trait Connector: Send + Sync {
    /// Open a motion-control session with the robot at `options.host`.
    fn control(&self, options: &ConnectOptions) -> Result<Box<dyn ControlInterface>>;

    /// Open a telemetry session with the robot at `options.host`.
    fn receive(&self, options: &ConnectOptions) -> Result<Box<dyn ReceiveInterface>>;

    /// Open a gripper session at `options.host:options.port`.
    fn gripper(&self, options: &GripperOptions) -> Result<Box<dyn GripperController>>;
}
