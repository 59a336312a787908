//! Motion-control bridge
//!
//! `ControlInterface` is the fixed object interface of the external motion
//! controller; `ControlBridge` is the facade the C surface talks to. Every
//! operation validates its handle against the registry first and answers
//! an invalid handle with the operation's documented sentinel plus a
//! logged diagnostic.
//!
//! Synchronous motion calls block the caller's thread until the controller
//! reports completion; asynchronous calls return after admission and are
//! polled via [`ControlBridge::async_progress`].

use std::sync::Arc;
use tracing::{error, info};

use crate::clock::CycleInstant;
use crate::config::ConnectOptions;
use crate::connector::Connector;
use crate::path::Path;
use crate::registry::{HandleRegistry, RawHandle, NULL_HANDLE};
use crate::Vector6;

/// Reference frame for continuous jogging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JogFrame {
    Base,
    Tool,
}

/// Fixed interface of the external motion controller.
pub trait ControlInterface: Send {
    /// Timestamp of the current control cycle, for loop synchronization.
    fn init_period(&mut self) -> CycleInstant;

    /// Block until the next cycle boundary relative to `cycle_start`.
    fn wait_period(&mut self, cycle_start: CycleInstant);

    fn stop_script(&mut self);
    fn stop_l(&mut self, deceleration: f64, asynchronous: bool);
    fn stop_j(&mut self, deceleration: f64, asynchronous: bool);

    /// Joint-space move to a joint configuration.
    fn move_j(&mut self, q: &Vector6, speed: f64, acceleration: f64, asynchronous: bool) -> bool;
    /// Joint-space move to a TCP pose (controller-side IK).
    fn move_j_ik(&mut self, pose: &Vector6, speed: f64, acceleration: f64, asynchronous: bool)
        -> bool;
    /// Linear move to a TCP pose.
    fn move_l(&mut self, pose: &Vector6, speed: f64, acceleration: f64, asynchronous: bool)
        -> bool;
    /// Linear move to a joint configuration (controller-side FK).
    fn move_l_fk(&mut self, q: &Vector6, speed: f64, acceleration: f64, asynchronous: bool)
        -> bool;

    /// Enter continuous velocity mode. Stays in effect until
    /// [`jog_stop`](Self::jog_stop) or a stop command intervenes.
    fn jog_start(&mut self, speeds: &Vector6, frame: JogFrame) -> bool;
    fn jog_stop(&mut self) -> bool;

    /// Execute a whole path in sequence.
    fn move_path(&mut self, path: &Path, asynchronous: bool) -> bool;

    /// Progress of the admitted asynchronous operation, 0..=100; negative
    /// when none is in flight.
    fn async_progress(&mut self) -> i32;

    /// Joint solution for a TCP pose, optionally seeded with `qnear`.
    fn inverse_kinematics(
        &mut self,
        pose: &Vector6,
        qnear: Option<&Vector6>,
        max_position_error: f64,
        max_orientation_error: f64,
    ) -> Vector6;
}

/// Facade over the registry of live control interfaces.
pub struct ControlBridge {
    connector: Arc<dyn Connector>,
    registry: HandleRegistry<Box<dyn ControlInterface>>,
}

impl ControlBridge {
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        ControlBridge {
            connector,
            registry: HandleRegistry::new(),
        }
    }

    /// Open a control session. Returns the null handle and logs a
    /// diagnostic on failure; a failed construction never registers a
    /// half-initialized handle.
    pub fn create(&self, options: &ConnectOptions) -> RawHandle {
        match self.connector.control(options) {
            Ok(interface) => {
                let handle = self.registry.register(interface);
                info!("Created control interface {} for {}", handle, options.host);
                handle
            }
            Err(e) => {
                error!("Could not create control interface for {}: {}", options.host, e);
                NULL_HANDLE
            }
        }
    }

    /// Release a control session. No-op on an invalid handle.
    pub fn destroy(&self, handle: RawHandle) {
        if self.registry.unregister(handle) {
            info!("Destroyed control interface {}", handle);
        }
    }

    pub fn validate(&self, handle: RawHandle) -> bool {
        self.registry.validate(handle)
    }

    /// Number of live control interfaces.
    pub fn live_count(&self) -> usize {
        self.registry.len()
    }

    fn call<R>(
        &self,
        handle: RawHandle,
        sentinel: R,
        f: impl FnOnce(&mut dyn ControlInterface) -> R,
    ) -> R {
        match self.registry.with(handle, |interface| f(interface.as_mut())) {
            Some(result) => result,
            None => {
                error!("Invalid control interface handle: {}", handle);
                sentinel
            }
        }
    }

    pub fn init_period(&self, handle: RawHandle) -> i64 {
        self.call(handle, 0, |c| c.init_period().as_millis())
    }

    pub fn wait_period(&self, handle: RawHandle, cycle_start_millis: i64) {
        self.call(handle, (), |c| {
            c.wait_period(CycleInstant::from_millis(cycle_start_millis))
        })
    }

    pub fn stop_script(&self, handle: RawHandle) {
        self.call(handle, (), |c| c.stop_script())
    }

    pub fn stop_l(&self, handle: RawHandle, deceleration: f64, asynchronous: bool) {
        self.call(handle, (), |c| c.stop_l(deceleration, asynchronous))
    }

    pub fn stop_j(&self, handle: RawHandle, deceleration: f64, asynchronous: bool) {
        self.call(handle, (), |c| c.stop_j(deceleration, asynchronous))
    }

    pub fn move_j(
        &self,
        handle: RawHandle,
        q: &Vector6,
        speed: f64,
        acceleration: f64,
        asynchronous: bool,
    ) -> bool {
        self.call(handle, false, |c| c.move_j(q, speed, acceleration, asynchronous))
    }

    pub fn move_j_ik(
        &self,
        handle: RawHandle,
        pose: &Vector6,
        speed: f64,
        acceleration: f64,
        asynchronous: bool,
    ) -> bool {
        self.call(handle, false, |c| c.move_j_ik(pose, speed, acceleration, asynchronous))
    }

    pub fn move_l(
        &self,
        handle: RawHandle,
        pose: &Vector6,
        speed: f64,
        acceleration: f64,
        asynchronous: bool,
    ) -> bool {
        self.call(handle, false, |c| c.move_l(pose, speed, acceleration, asynchronous))
    }

    pub fn move_l_fk(
        &self,
        handle: RawHandle,
        q: &Vector6,
        speed: f64,
        acceleration: f64,
        asynchronous: bool,
    ) -> bool {
        self.call(handle, false, |c| c.move_l_fk(q, speed, acceleration, asynchronous))
    }

    pub fn jog_start(&self, handle: RawHandle, speeds: &Vector6, frame: JogFrame) -> bool {
        self.call(handle, false, |c| c.jog_start(speeds, frame))
    }

    pub fn jog_stop(&self, handle: RawHandle) -> bool {
        self.call(handle, false, |c| c.jog_stop())
    }

    pub fn move_path(&self, handle: RawHandle, path: &Path, asynchronous: bool) -> bool {
        self.call(handle, false, |c| c.move_path(path, asynchronous))
    }

    pub fn async_progress(&self, handle: RawHandle) -> i32 {
        self.call(handle, 0, |c| c.async_progress())
    }

    /// `None` on an invalid handle; the C surface zero-fills its outputs.
    pub fn inverse_kinematics(
        &self,
        handle: RawHandle,
        pose: &Vector6,
        qnear: Option<&Vector6>,
        max_position_error: f64,
        max_orientation_error: f64,
    ) -> Option<Vector6> {
        self.call(handle, None, |c| {
            Some(c.inverse_kinematics(pose, qnear, max_position_error, max_orientation_error))
        })
    }
}
