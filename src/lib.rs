//! urb - C-callable bridge for Universal Robots control and telemetry
//!
//! This library lets a foreign caller (any language that can call flat C
//! functions with primitive arguments) drive a UR motion controller, its
//! telemetry stream, and a Robotiq-style gripper without linking against
//! their native object model. Live controller objects are held behind
//! opaque integer handles; every call validates its handle, marshals
//! enumerated codes, flattened motion paths, and controller-clock
//! timestamps, and answers failures with documented sentinel values
//! instead of faults.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use urb::{BridgeContext, Connector};
//!
//! fn main() {
//!     // `RobotConnector` is the embedder's implementation of the
//!     // external controller constructors.
//!     # struct RobotConnector;
//!     # impl urb::Connector for RobotConnector {
//!     #     fn control(&self, _: &urb::ConnectOptions) -> urb::Result<Box<dyn urb::ControlInterface>> { unimplemented!() }
//!     #     fn receive(&self, _: &urb::ConnectOptions) -> urb::Result<Box<dyn urb::ReceiveInterface>> { unimplemented!() }
//!     #     fn gripper(&self, _: &urb::GripperOptions) -> urb::Result<Box<dyn urb::GripperController>> { unimplemented!() }
//!     # }
//!     let connector: Arc<dyn Connector> = Arc::new(RobotConnector);
//!     urb::ffi::install(BridgeContext::new(connector));
//!
//!     // From here the C surface in include/urb.h is live:
//!     //   uint64_t h = urb_control_new("192.168.1.10", false);
//!     //   urb_control_move_j(h, q, 1.05, 1.4, false);
//!     //   urb_control_delete(h);
//! }
//! ```
//!
//! # Architecture
//!
//! - **HandleRegistry**: per-interface-kind live set; the sole authority
//!   on whether a handle may be used
//! - **ControlBridge / ReceiveBridge / GripperBridge**: facades that
//!   validate handles, translate arguments, and forward to the external
//!   interfaces
//! - **Connector**: dependency-injected factory for the external
//!   controller objects
//! - **ffi**: the `extern "C"` surface over one process-wide context

pub mod clock;
pub mod config;
pub mod connector;
pub mod control;
pub mod enums;
pub mod error;
pub mod ffi;
pub mod gripper;
pub mod path;
pub mod receive;
pub mod registry;

/// A 6-element vector: a Cartesian pose (x, y, z, rx, ry, rz), a joint
/// configuration, or a velocity, depending on the operation.
pub type Vector6 = [f64; 6];

// High-level exports for easy usage
pub use config::{BridgeConfig, ConnectOptions, GripperOptions};
pub use connector::Connector;
pub use control::{ControlBridge, ControlInterface, JogFrame};
pub use error::{BridgeError, Result};
pub use ffi::BridgeContext;
pub use gripper::{GripperBridge, GripperController};
pub use receive::{ReceiveBridge, ReceiveInterface};
pub use registry::{HandleRegistry, RawHandle, NULL_HANDLE};

// Marshalling exports for advanced usage
pub use clock::CycleInstant;
pub use enums::{MoveMode, MoveParameter, MoveType, ObjectStatus, PositionId, PositionType, Unit};
pub use path::{flatten, unflatten, FlatPath, Path, PathEntry};
