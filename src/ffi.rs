//! C surface of the bridge
//!
//! One function family per interface kind (`urb_control_*`,
//! `urb_receive_*`, `urb_gripper_*`), every argument a primitive, an
//! array of primitives, or an opaque `u64` handle. The exported functions
//! operate on a process-wide [`BridgeContext`] installed once via
//! [`install`]; construction before installation logs a diagnostic and
//! returns the null handle. No panic or unwind crosses this boundary:
//! failures are logged and answered with each operation's documented
//! sentinel.
//!
//! The matching C declarations live in `include/urb.h`.

use std::ffi::CStr;
use std::os::raw::c_char;
use std::sync::{Arc, OnceLock};
use tracing::{error, info, warn};

use crate::config::{BridgeConfig, ConnectOptions, GripperOptions};
use crate::connector::Connector;
use crate::control::{ControlBridge, JogFrame};
use crate::enums::{MoveMode, MoveParameter, ObjectStatus, PositionId, Unit};
use crate::gripper::GripperBridge;
use crate::path;
use crate::receive::ReceiveBridge;
use crate::registry::{RawHandle, NULL_HANDLE};
use crate::Vector6;

/// Process-wide bridge state: configuration plus the three facades, all
/// built over one connector.
pub struct BridgeContext {
    config: BridgeConfig,
    control: ControlBridge,
    receive: ReceiveBridge,
    gripper: GripperBridge,
}

impl BridgeContext {
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Self::with_config(connector, BridgeConfig::default())
    }

    pub fn with_config(connector: Arc<dyn Connector>, config: BridgeConfig) -> Self {
        BridgeContext {
            config,
            control: ControlBridge::new(connector.clone()),
            receive: ReceiveBridge::new(connector.clone()),
            gripper: GripperBridge::new(connector),
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn control(&self) -> &ControlBridge {
        &self.control
    }

    pub fn receive(&self) -> &ReceiveBridge {
        &self.receive
    }

    pub fn gripper(&self) -> &GripperBridge {
        &self.gripper
    }
}

static CONTEXT: OnceLock<BridgeContext> = OnceLock::new();

/// Install the process-wide bridge context. Must be called by the
/// embedding process before the C surface is used; returns false (and
/// leaves the original in place) if a context was already installed.
pub fn install(context: BridgeContext) -> bool {
    match CONTEXT.set(context) {
        Ok(()) => {
            info!("Bridge context installed");
            true
        }
        Err(_) => {
            error!("Bridge context already installed");
            false
        }
    }
}

/// The installed context, if any. Embedders can use this to reach the
/// facades directly from Rust.
pub fn context() -> Option<&'static BridgeContext> {
    CONTEXT.get()
}

fn ctx() -> Option<&'static BridgeContext> {
    let context = CONTEXT.get();
    if context.is_none() {
        error!("Bridge used before a connector was installed");
    }
    context
}

/// Read a caller-supplied host string, falling back to the configured
/// default on null, empty, or non-UTF-8 input.
unsafe fn host_or_default(ip: *const c_char, default_host: &str) -> String {
    if ip.is_null() {
        return default_host.to_string();
    }
    match CStr::from_ptr(ip).to_str() {
        Ok("") => default_host.to_string(),
        Ok(host) => host.to_string(),
        Err(_) => {
            warn!("Host string is not valid UTF-8, using {}", default_host);
            default_host.to_string()
        }
    }
}

/// Read six doubles from a caller-supplied array. Null is a contract
/// violation answered with `None`.
unsafe fn read_vector6(values: *const f64) -> Option<Vector6> {
    if values.is_null() {
        error!("Pose argument is null");
        return None;
    }
    let mut out = [0.0; 6];
    out.copy_from_slice(std::slice::from_raw_parts(values, 6));
    Some(out)
}

/// Write six doubles through a caller-supplied output pointer.
unsafe fn write_vector6(out: *mut f64, values: &Vector6) {
    if out.is_null() {
        return;
    }
    std::slice::from_raw_parts_mut(out, 6).copy_from_slice(values);
}

unsafe fn zero_vector6(out: *mut f64) {
    write_vector6(out, &[0.0; 6]);
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Initialize boundary logging. Honors `RUST_LOG` when set; otherwise
/// `verbose` selects debug-level output. Returns false when a subscriber
/// is already installed.
///
/// # Safety
/// Call once, from a single thread, during initialization.
#[no_mangle]
pub unsafe extern "C" fn urb_logging_init(verbose: bool) -> bool {
    let default_directive = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    tracing_subscriber::fmt().with_env_filter(filter).try_init().is_ok()
}

// ---------------------------------------------------------------------------
// Control interface
// ---------------------------------------------------------------------------

/// Open a motion-control session. Returns 0 on failure.
///
/// # Safety
/// `ip` must be null or a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn urb_control_new(ip: *const c_char, verbose: bool) -> RawHandle {
    let Some(context) = ctx() else {
        return NULL_HANDLE;
    };
    let options = ConnectOptions {
        host: host_or_default(ip, &context.config.robot.host),
        verbose,
    };
    context.control.create(&options)
}

/// Close a motion-control session. Ignores an invalid handle.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_control_delete(handle: RawHandle) {
    if let Some(context) = ctx() {
        context.control.destroy(handle);
    }
}

/// Millisecond timestamp of the current control cycle, for synchronizing
/// a caller loop via `urb_control_wait_period`. 0 on an invalid handle.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_control_init_period(handle: RawHandle) -> i64 {
    match ctx() {
        Some(context) => context.control.init_period(handle),
        None => 0,
    }
}

/// Block until the next control-cycle boundary relative to a timestamp
/// previously obtained from `urb_control_init_period` on the same handle.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_control_wait_period(handle: RawHandle, cycle_start_millis: i64) {
    if let Some(context) = ctx() {
        context.control.wait_period(handle, cycle_start_millis);
    }
}

/// Abort the running controller script.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_control_stop_script(handle: RawHandle) {
    if let Some(context) = ctx() {
        context.control.stop_script(handle);
    }
}

/// Decelerate a linear motion to a stop.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_control_stop_l(
    handle: RawHandle,
    deceleration: f64,
    asynchronous: bool,
) {
    if let Some(context) = ctx() {
        context.control.stop_l(handle, deceleration, asynchronous);
    }
}

/// Decelerate a joint motion to a stop.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_control_stop_j(
    handle: RawHandle,
    deceleration: f64,
    asynchronous: bool,
) {
    if let Some(context) = ctx() {
        context.control.stop_j(handle, deceleration, asynchronous);
    }
}

/// Joint-space move to a joint configuration. Blocks until completion
/// unless `asynchronous`.
///
/// # Safety
/// `q` must point to 6 readable doubles.
#[no_mangle]
pub unsafe extern "C" fn urb_control_move_j(
    handle: RawHandle,
    q: *const f64,
    speed: f64,
    acceleration: f64,
    asynchronous: bool,
) -> bool {
    let (Some(context), Some(q)) = (ctx(), read_vector6(q)) else {
        return false;
    };
    context.control.move_j(handle, &q, speed, acceleration, asynchronous)
}

/// Joint-space move to a TCP pose (controller-side IK).
///
/// # Safety
/// `pose` must point to 6 readable doubles.
#[no_mangle]
pub unsafe extern "C" fn urb_control_move_j_ik(
    handle: RawHandle,
    pose: *const f64,
    speed: f64,
    acceleration: f64,
    asynchronous: bool,
) -> bool {
    let (Some(context), Some(pose)) = (ctx(), read_vector6(pose)) else {
        return false;
    };
    context.control.move_j_ik(handle, &pose, speed, acceleration, asynchronous)
}

/// Linear move to a TCP pose.
///
/// # Safety
/// `pose` must point to 6 readable doubles.
#[no_mangle]
pub unsafe extern "C" fn urb_control_move_l(
    handle: RawHandle,
    pose: *const f64,
    speed: f64,
    acceleration: f64,
    asynchronous: bool,
) -> bool {
    let (Some(context), Some(pose)) = (ctx(), read_vector6(pose)) else {
        return false;
    };
    context.control.move_l(handle, &pose, speed, acceleration, asynchronous)
}

/// Linear move to a joint configuration (controller-side FK).
///
/// # Safety
/// `q` must point to 6 readable doubles.
#[no_mangle]
pub unsafe extern "C" fn urb_control_move_l_fk(
    handle: RawHandle,
    q: *const f64,
    speed: f64,
    acceleration: f64,
    asynchronous: bool,
) -> bool {
    let (Some(context), Some(q)) = (ctx(), read_vector6(q)) else {
        return false;
    };
    context.control.move_l_fk(handle, &q, speed, acceleration, asynchronous)
}

/// Start continuous velocity-mode motion in the tool or base frame. The
/// mode persists until `urb_control_jog_stop` or a stop command.
///
/// # Safety
/// `speeds` must point to 6 readable doubles.
#[no_mangle]
pub unsafe extern "C" fn urb_control_jog_start(
    handle: RawHandle,
    speeds: *const f64,
    tool_frame: bool,
) -> bool {
    let (Some(context), Some(speeds)) = (ctx(), read_vector6(speeds)) else {
        return false;
    };
    let frame = if tool_frame { JogFrame::Tool } else { JogFrame::Base };
    context.control.jog_start(handle, &speeds, frame)
}

/// Leave velocity mode. Succeeds even without a prior jog start.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_control_jog_stop(handle: RawHandle) -> bool {
    match ctx() {
        Some(context) => context.control.jog_stop(handle),
        None => false,
    }
}

/// Execute a flattened motion path: per-entry move-type codes,
/// position-type codes, and parameter counts, plus one concatenated
/// parameter array. The counts must sum exactly to `parameters_len`; a
/// mismatch or an out-of-range code is refused before anything reaches
/// the controller.
///
/// # Safety
/// `move_types`, `position_types`, and `parameter_counts` must each point
/// to `count` readable ints; `parameters` must point to `parameters_len`
/// readable doubles.
#[no_mangle]
pub unsafe extern "C" fn urb_control_move_path(
    handle: RawHandle,
    count: i32,
    move_types: *const i32,
    position_types: *const i32,
    parameter_counts: *const i32,
    parameters_len: i32,
    parameters: *const f64,
    asynchronous: bool,
) -> bool {
    let Some(context) = ctx() else {
        return false;
    };
    if count < 0 || parameters_len < 0 {
        error!("Path arrays have negative length: count={}, parameters_len={}", count, parameters_len);
        return false;
    }
    if count > 0 && (move_types.is_null() || position_types.is_null() || parameter_counts.is_null()) {
        error!("Path entry arrays are null");
        return false;
    }
    if parameters_len > 0 && parameters.is_null() {
        error!("Path parameter array is null");
        return false;
    }

    let count = count as usize;
    let (move_types, position_types, parameter_counts) = if count == 0 {
        (&[][..], &[][..], &[][..])
    } else {
        (
            std::slice::from_raw_parts(move_types, count),
            std::slice::from_raw_parts(position_types, count),
            std::slice::from_raw_parts(parameter_counts, count),
        )
    };
    let parameters = if parameters_len == 0 {
        &[][..]
    } else {
        std::slice::from_raw_parts(parameters, parameters_len as usize)
    };

    let path = match path::unflatten(move_types, position_types, parameter_counts, parameters) {
        Ok(path) => path,
        Err(e) => {
            error!("Rejected motion path: {}", e);
            return false;
        }
    };

    context.control.move_path(handle, &path, asynchronous)
}

/// Progress of the admitted asynchronous operation: 0..=100, negative
/// when none is in flight, 0 on an invalid handle.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_control_async_progress(handle: RawHandle) -> i32 {
    match ctx() {
        Some(context) => context.control.async_progress(handle),
        None => 0,
    }
}

/// Joint solution for a TCP pose, written through `result` (6 doubles).
/// `qnear` may be null for an unseeded solve. Zero-fills the result and
/// returns false on an invalid handle.
///
/// # Safety
/// `result` must point to 6 writable doubles; `pose` to 6 readable
/// doubles; `qnear` must be null or point to 6 readable doubles.
#[no_mangle]
pub unsafe extern "C" fn urb_control_inverse_kinematics(
    handle: RawHandle,
    result: *mut f64,
    pose: *const f64,
    qnear: *const f64,
    max_position_error: f64,
    max_orientation_error: f64,
) -> bool {
    let (Some(context), Some(pose)) = (ctx(), read_vector6(pose)) else {
        zero_vector6(result);
        return false;
    };
    let qnear = if qnear.is_null() { None } else { read_vector6(qnear) };

    match context.control.inverse_kinematics(
        handle,
        &pose,
        qnear.as_ref(),
        max_position_error,
        max_orientation_error,
    ) {
        Some(joints) => {
            write_vector6(result, &joints);
            true
        }
        None => {
            zero_vector6(result);
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Receive interface
// ---------------------------------------------------------------------------

/// Open a telemetry session. Returns 0 on failure.
///
/// # Safety
/// `ip` must be null or a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn urb_receive_new(ip: *const c_char, verbose: bool) -> RawHandle {
    let Some(context) = ctx() else {
        return NULL_HANDLE;
    };
    let options = ConnectOptions {
        host: host_or_default(ip, &context.config.robot.host),
        verbose,
    };
    context.receive.create(&options)
}

/// Close a telemetry session. Ignores an invalid handle.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_receive_delete(handle: RawHandle) {
    if let Some(context) = ctx() {
        context.receive.destroy(handle);
    }
}

/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_receive_is_connected(handle: RawHandle) -> bool {
    match ctx() {
        Some(context) => context.receive.is_connected(handle),
        None => false,
    }
}

/// Actual joint configuration, written through `q` (6 doubles).
/// Zero-fills and returns false on an invalid handle.
///
/// # Safety
/// `q` must point to 6 writable doubles.
#[no_mangle]
pub unsafe extern "C" fn urb_receive_actual_q(handle: RawHandle, q: *mut f64) -> bool {
    let joints = ctx().and_then(|context| context.receive.actual_q(handle));
    match joints {
        Some(joints) => {
            write_vector6(q, &joints);
            true
        }
        None => {
            zero_vector6(q);
            false
        }
    }
}

/// Actual TCP pose, written through `pose` (6 doubles). Zero-fills and
/// returns false on an invalid handle.
///
/// # Safety
/// `pose` must point to 6 writable doubles.
#[no_mangle]
pub unsafe extern "C" fn urb_receive_actual_tcp_pose(handle: RawHandle, pose: *mut f64) -> bool {
    let tcp = ctx().and_then(|context| context.receive.actual_tcp_pose(handle));
    match tcp {
        Some(tcp) => {
            write_vector6(pose, &tcp);
            true
        }
        None => {
            zero_vector6(pose);
            false
        }
    }
}

/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_receive_is_protective_stopped(handle: RawHandle) -> bool {
    match ctx() {
        Some(context) => context.receive.is_protective_stopped(handle),
        None => false,
    }
}

/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_receive_is_emergency_stopped(handle: RawHandle) -> bool {
    match ctx() {
        Some(context) => context.receive.is_emergency_stopped(handle),
        None => false,
    }
}

// ---------------------------------------------------------------------------
// Gripper interface
// ---------------------------------------------------------------------------

/// Open a gripper session. `port` <= 0 selects the configured default.
/// Returns 0 on failure.
///
/// # Safety
/// `ip` must be null or a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_new(
    ip: *const c_char,
    port: i32,
    verbose: bool,
) -> RawHandle {
    let Some(context) = ctx() else {
        return NULL_HANDLE;
    };
    let port = if (1..=u16::MAX as i32).contains(&port) {
        port as u16
    } else {
        context.config.gripper_port()
    };
    let options = GripperOptions {
        host: host_or_default(ip, context.config.gripper_host()),
        port,
        verbose,
    };
    context.gripper.create(&options)
}

/// Close a gripper session. Ignores an invalid handle.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_delete(handle: RawHandle) {
    if let Some(context) = ctx() {
        context.gripper.destroy(handle);
    }
}

/// Establish the gripper connection. `timeout_ms` <= 0 selects the
/// configured default. Returns false on failure instead of faulting.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_connect(handle: RawHandle, timeout_ms: i32) -> bool {
    let Some(context) = ctx() else {
        return false;
    };
    let timeout_ms = if timeout_ms > 0 {
        timeout_ms as u32
    } else {
        context.config.gripper_timeout_ms()
    };
    context.gripper.connect(handle, timeout_ms)
}

/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_disconnect(handle: RawHandle) {
    if let Some(context) = ctx() {
        context.gripper.disconnect(handle);
    }
}

/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_is_connected(handle: RawHandle) -> bool {
    match ctx() {
        Some(context) => context.gripper.is_connected(handle),
        None => false,
    }
}

/// Run the activation sequence; must complete before move commands have
/// a defined effect. Returns false on failure.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_activate(handle: RawHandle, auto_calibrate: bool) -> bool {
    match ctx() {
        Some(context) => context.gripper.activate(handle, auto_calibrate),
        None => false,
    }
}

/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_is_active(handle: RawHandle) -> bool {
    match ctx() {
        Some(context) => context.gripper.is_active(handle),
        None => false,
    }
}

/// Position value meaning "fully open" in the configured unit.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_open_position(handle: RawHandle) -> f32 {
    match ctx() {
        Some(context) => context.gripper.open_position(handle),
        None => 0.0,
    }
}

/// Position value meaning "fully closed" in the configured unit.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_closed_position(handle: RawHandle) -> f32 {
    match ctx() {
        Some(context) => context.gripper.closed_position(handle),
        None => 0.0,
    }
}

/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_is_open(handle: RawHandle) -> bool {
    match ctx() {
        Some(context) => context.gripper.is_open(handle),
        None => false,
    }
}

/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_is_closed(handle: RawHandle) -> bool {
    match ctx() {
        Some(context) => context.gripper.is_closed(handle),
        None => false,
    }
}

fn gripper_status_op(
    handle: RawHandle,
    mode: i32,
    f: impl FnOnce(&GripperBridge, MoveMode) -> ObjectStatus,
) -> i32 {
    let Some(context) = ctx() else {
        return ObjectStatus::AtDest.code();
    };
    match MoveMode::from_code(mode) {
        Ok(mode) => f(&context.gripper, mode).code(),
        Err(e) => {
            error!("Rejected gripper command for handle {}: {}", handle, e);
            ObjectStatus::AtDest.code()
        }
    }
}

/// Command a move to `position`. `mode` 0 returns at admission, 1 blocks
/// until motion end. Returns the object-detection status code; `AtDest`
/// (3) doubles as the degraded-mode answer for an invalid handle or a
/// malformed mode code.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_move(
    handle: RawHandle,
    position: f32,
    speed: f32,
    force: f32,
    mode: i32,
) -> i32 {
    gripper_status_op(handle, mode, |gripper, mode| {
        gripper.move_to(handle, position, speed, force, mode)
    })
}

/// Move to the fully-open position. Same status semantics as
/// `urb_gripper_move`.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_open(
    handle: RawHandle,
    speed: f32,
    force: f32,
    mode: i32,
) -> i32 {
    gripper_status_op(handle, mode, |gripper, mode| gripper.open(handle, speed, force, mode))
}

/// Move to the fully-closed position. Same status semantics as
/// `urb_gripper_move`.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_close(
    handle: RawHandle,
    speed: f32,
    force: f32,
    mode: i32,
) -> i32 {
    gripper_status_op(handle, mode, |gripper, mode| gripper.close(handle, speed, force, mode))
}

/// Emergency release toward open (0) or closed (1).
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_emergency_release(
    handle: RawHandle,
    direction: i32,
    mode: i32,
) {
    let Some(context) = ctx() else {
        return;
    };
    match (PositionId::from_code(direction), MoveMode::from_code(mode)) {
        (Ok(direction), Ok(mode)) => context.gripper.emergency_release(handle, direction, mode),
        (Err(e), _) | (_, Err(e)) => {
            error!("Rejected emergency release for handle {}: {}", handle, e);
        }
    }
}

/// Configure the unit of a command channel: parameter 0..=2
/// (position/speed/force), unit 0..=3 (device/normalized/percent/mm).
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_set_unit(handle: RawHandle, parameter: i32, unit: i32) {
    let Some(context) = ctx() else {
        return;
    };
    match (MoveParameter::from_code(parameter), Unit::from_code(unit)) {
        (Ok(parameter), Ok(unit)) => context.gripper.set_unit(handle, parameter, unit),
        (Err(e), _) | (_, Err(e)) => {
            error!("Rejected unit configuration for handle {}: {}", handle, e);
        }
    }
}

/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_set_position_range_mm(handle: RawHandle, range: i32) {
    if let Some(context) = ctx() {
        context.gripper.set_position_range_mm(handle, range);
    }
}

/// Set the default speed, returning the value actually applied.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_set_speed(handle: RawHandle, speed: f32) -> f32 {
    match ctx() {
        Some(context) => context.gripper.set_speed(handle, speed),
        None => 0.0,
    }
}

/// Set the default force, returning the value actually applied.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_set_force(handle: RawHandle, force: f32) -> f32 {
    match ctx() {
        Some(context) => context.gripper.set_force(handle, force),
        None => 0.0,
    }
}

/// Object-detection status code; `AtDest` (3) on an invalid handle.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_object_detection_status(handle: RawHandle) -> i32 {
    match ctx() {
        Some(context) => context.gripper.object_detection_status(handle).code(),
        None => ObjectStatus::AtDest.code(),
    }
}

/// Block until the gripper signals motion end; returns the final
/// object-detection status code. `AtDest` (3) on an invalid handle.
///
/// # Safety
/// No pointer arguments; safe with any handle value.
#[no_mangle]
pub unsafe extern "C" fn urb_gripper_wait_for_motion_complete(handle: RawHandle) -> i32 {
    match ctx() {
        Some(context) => context.gripper.wait_for_motion_complete(handle).code(),
        None => ObjectStatus::AtDest.code(),
    }
}
