//! Gripper bridge
//!
//! `GripperController` is the fixed interface of the external gripper
//! library; `GripperBridge` validates handles and translates the integer
//! codes of the C surface into the typed move/unit parameters.
//!
//! `activate` must complete before `move_to`/`open`/`close` have a defined
//! effect. Status queries answer an invalid handle with
//! [`ObjectStatus::AtDest`]: the status enumeration has no error member,
//! so the documented fallback signals degraded mode, not success.

use std::sync::Arc;
use tracing::{error, info};

use crate::config::GripperOptions;
use crate::connector::Connector;
use crate::enums::{MoveMode, MoveParameter, ObjectStatus, PositionId, Unit};
use crate::registry::{HandleRegistry, RawHandle, NULL_HANDLE};
use crate::Result;

/// Fixed interface of the external gripper controller.
pub trait GripperController: Send {
    /// Establish the connection; fails rather than unwinding.
    fn connect(&mut self, timeout_ms: u32) -> Result<()>;
    fn disconnect(&mut self);
    fn is_connected(&mut self) -> bool;

    /// Run the activation sequence, optionally auto-calibrating the
    /// position range.
    fn activate(&mut self, auto_calibrate: bool) -> Result<()>;
    fn is_active(&mut self) -> bool;

    /// Position value meaning "fully open" in the configured unit.
    fn open_position(&mut self) -> f32;
    /// Position value meaning "fully closed" in the configured unit.
    fn closed_position(&mut self) -> f32;
    fn is_open(&mut self) -> bool;
    fn is_closed(&mut self) -> bool;

    /// Command a move; `mode` selects admission-only versus
    /// block-until-motion-end. Returns the object-detection status either
    /// way.
    fn move_to(&mut self, position: f32, speed: f32, force: f32, mode: MoveMode) -> ObjectStatus;
    fn open(&mut self, speed: f32, force: f32, mode: MoveMode) -> ObjectStatus;
    fn close(&mut self, speed: f32, force: f32, mode: MoveMode) -> ObjectStatus;
    fn emergency_release(&mut self, direction: PositionId, mode: MoveMode);

    fn set_unit(&mut self, parameter: MoveParameter, unit: Unit);
    fn set_position_range_mm(&mut self, range: i32);
    /// Set the default speed, returning the value actually applied.
    fn set_speed(&mut self, speed: f32) -> f32;
    /// Set the default force, returning the value actually applied.
    fn set_force(&mut self, force: f32) -> f32;

    fn object_detection_status(&mut self) -> ObjectStatus;
    /// Block until the gripper signals motion end, returning the final
    /// object-detection status.
    fn wait_for_motion_complete(&mut self) -> ObjectStatus;
}

/// Facade over the registry of live gripper controllers.
pub struct GripperBridge {
    connector: Arc<dyn Connector>,
    registry: HandleRegistry<Box<dyn GripperController>>,
}

impl GripperBridge {
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        GripperBridge {
            connector,
            registry: HandleRegistry::new(),
        }
    }

    /// Open a gripper session. Null handle + diagnostic on failure.
    pub fn create(&self, options: &GripperOptions) -> RawHandle {
        match self.connector.gripper(options) {
            Ok(controller) => {
                let handle = self.registry.register(controller);
                info!(
                    "Created gripper controller {} for {}:{}",
                    handle, options.host, options.port
                );
                handle
            }
            Err(e) => {
                error!(
                    "Could not create gripper controller for {}:{}: {}",
                    options.host, options.port, e
                );
                NULL_HANDLE
            }
        }
    }

    /// Release a gripper session. No-op on an invalid handle.
    pub fn destroy(&self, handle: RawHandle) {
        if self.registry.unregister(handle) {
            info!("Destroyed gripper controller {}", handle);
        }
    }

    pub fn validate(&self, handle: RawHandle) -> bool {
        self.registry.validate(handle)
    }

    /// Number of live gripper controllers.
    pub fn live_count(&self) -> usize {
        self.registry.len()
    }

    fn call<R>(
        &self,
        handle: RawHandle,
        sentinel: R,
        f: impl FnOnce(&mut dyn GripperController) -> R,
    ) -> R {
        match self.registry.with(handle, |controller| f(controller.as_mut())) {
            Some(result) => result,
            None => {
                error!("Invalid gripper controller handle: {}", handle);
                sentinel
            }
        }
    }

    pub fn connect(&self, handle: RawHandle, timeout_ms: u32) -> bool {
        self.call(handle, false, |g| match g.connect(timeout_ms) {
            Ok(()) => true,
            Err(e) => {
                error!("Gripper {} connect failed: {}", handle, e);
                false
            }
        })
    }

    pub fn disconnect(&self, handle: RawHandle) {
        self.call(handle, (), |g| g.disconnect())
    }

    pub fn is_connected(&self, handle: RawHandle) -> bool {
        self.call(handle, false, |g| g.is_connected())
    }

    pub fn activate(&self, handle: RawHandle, auto_calibrate: bool) -> bool {
        self.call(handle, false, |g| match g.activate(auto_calibrate) {
            Ok(()) => true,
            Err(e) => {
                error!("Gripper {} activation failed: {}", handle, e);
                false
            }
        })
    }

    pub fn is_active(&self, handle: RawHandle) -> bool {
        self.call(handle, false, |g| g.is_active())
    }

    pub fn open_position(&self, handle: RawHandle) -> f32 {
        self.call(handle, 0.0, |g| g.open_position())
    }

    pub fn closed_position(&self, handle: RawHandle) -> f32 {
        self.call(handle, 0.0, |g| g.closed_position())
    }

    pub fn is_open(&self, handle: RawHandle) -> bool {
        self.call(handle, false, |g| g.is_open())
    }

    pub fn is_closed(&self, handle: RawHandle) -> bool {
        self.call(handle, false, |g| g.is_closed())
    }

    pub fn move_to(
        &self,
        handle: RawHandle,
        position: f32,
        speed: f32,
        force: f32,
        mode: MoveMode,
    ) -> ObjectStatus {
        self.call(handle, ObjectStatus::AtDest, |g| {
            g.move_to(position, speed, force, mode)
        })
    }

    pub fn open(&self, handle: RawHandle, speed: f32, force: f32, mode: MoveMode) -> ObjectStatus {
        self.call(handle, ObjectStatus::AtDest, |g| g.open(speed, force, mode))
    }

    pub fn close(&self, handle: RawHandle, speed: f32, force: f32, mode: MoveMode) -> ObjectStatus {
        self.call(handle, ObjectStatus::AtDest, |g| g.close(speed, force, mode))
    }

    pub fn emergency_release(&self, handle: RawHandle, direction: PositionId, mode: MoveMode) {
        self.call(handle, (), |g| g.emergency_release(direction, mode))
    }

    pub fn set_unit(&self, handle: RawHandle, parameter: MoveParameter, unit: Unit) {
        self.call(handle, (), |g| g.set_unit(parameter, unit))
    }

    pub fn set_position_range_mm(&self, handle: RawHandle, range: i32) {
        self.call(handle, (), |g| g.set_position_range_mm(range))
    }

    pub fn set_speed(&self, handle: RawHandle, speed: f32) -> f32 {
        self.call(handle, 0.0, |g| g.set_speed(speed))
    }

    pub fn set_force(&self, handle: RawHandle, force: f32) -> f32 {
        self.call(handle, 0.0, |g| g.set_force(force))
    }

    pub fn object_detection_status(&self, handle: RawHandle) -> ObjectStatus {
        self.call(handle, ObjectStatus::AtDest, |g| g.object_detection_status())
    }

    pub fn wait_for_motion_complete(&self, handle: RawHandle) -> ObjectStatus {
        self.call(handle, ObjectStatus::AtDest, |g| g.wait_for_motion_complete())
    }
}
