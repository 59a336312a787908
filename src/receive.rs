//! Telemetry bridge
//!
//! `ReceiveInterface` is the fixed interface of the external telemetry
//! stream; `ReceiveBridge` exposes its pure reads behind handle
//! validation. Getters have no side effects; while the stream is in a
//! disconnected transient state they may return stale or zeroed data
//! rather than blocking.

use std::sync::Arc;
use tracing::{error, info};

use crate::config::ConnectOptions;
use crate::connector::Connector;
use crate::registry::{HandleRegistry, RawHandle, NULL_HANDLE};
use crate::Vector6;

/// Fixed interface of the external telemetry stream.
pub trait ReceiveInterface: Send {
    fn is_connected(&mut self) -> bool;

    /// Actual joint configuration, radians.
    fn actual_q(&mut self) -> Vector6;

    /// Actual TCP pose: x, y, z, rx, ry, rz.
    fn actual_tcp_pose(&mut self) -> Vector6;

    fn is_protective_stopped(&mut self) -> bool;
    fn is_emergency_stopped(&mut self) -> bool;
}

/// Facade over the registry of live telemetry interfaces.
pub struct ReceiveBridge {
    connector: Arc<dyn Connector>,
    registry: HandleRegistry<Box<dyn ReceiveInterface>>,
}

impl ReceiveBridge {
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        ReceiveBridge {
            connector,
            registry: HandleRegistry::new(),
        }
    }

    /// Open a telemetry session. Null handle + diagnostic on failure.
    pub fn create(&self, options: &ConnectOptions) -> RawHandle {
        match self.connector.receive(options) {
            Ok(interface) => {
                let handle = self.registry.register(interface);
                info!("Created receive interface {} for {}", handle, options.host);
                handle
            }
            Err(e) => {
                error!("Could not create receive interface for {}: {}", options.host, e);
                NULL_HANDLE
            }
        }
    }

    /// Release a telemetry session. No-op on an invalid handle.
    pub fn destroy(&self, handle: RawHandle) {
        if self.registry.unregister(handle) {
            info!("Destroyed receive interface {}", handle);
        }
    }

    pub fn validate(&self, handle: RawHandle) -> bool {
        self.registry.validate(handle)
    }

    /// Number of live telemetry interfaces.
    pub fn live_count(&self) -> usize {
        self.registry.len()
    }

    fn call<R>(
        &self,
        handle: RawHandle,
        sentinel: R,
        f: impl FnOnce(&mut dyn ReceiveInterface) -> R,
    ) -> R {
        match self.registry.with(handle, |interface| f(interface.as_mut())) {
            Some(result) => result,
            None => {
                error!("Invalid receive interface handle: {}", handle);
                sentinel
            }
        }
    }

    pub fn is_connected(&self, handle: RawHandle) -> bool {
        self.call(handle, false, |r| r.is_connected())
    }

    /// `None` on an invalid handle; the C surface zero-fills its outputs.
    pub fn actual_q(&self, handle: RawHandle) -> Option<Vector6> {
        self.call(handle, None, |r| Some(r.actual_q()))
    }

    /// `None` on an invalid handle; the C surface zero-fills its outputs.
    pub fn actual_tcp_pose(&self, handle: RawHandle) -> Option<Vector6> {
        self.call(handle, None, |r| Some(r.actual_tcp_pose()))
    }

    pub fn is_protective_stopped(&self, handle: RawHandle) -> bool {
        self.call(handle, false, |r| r.is_protective_stopped())
    }

    pub fn is_emergency_stopped(&self, handle: RawHandle) -> bool {
        self.call(handle, false, |r| r.is_emergency_stopped())
    }
}
