//! End-to-end tests of the C surface over a scripted connector.
//!
//! One mock connector is installed for the whole test binary; each test
//! uses its own host name so it can inspect the calls recorded against
//! the interface it created.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;

use urb::ffi::{self, BridgeContext};
use urb::{
    BridgeError, ConnectOptions, Connector, ControlInterface, CycleInstant, GripperController,
    GripperOptions, JogFrame, MoveMode, MoveParameter, ObjectStatus, Path, PositionId,
    ReceiveInterface, Result, Unit, Vector6, NULL_HANDLE,
};

/// Hosts under this address are treated as unreachable by the mock.
const UNREACHABLE: &str = "203.0.113.9";

#[derive(Default)]
struct RobotState {
    moves: Vec<(&'static str, Vector6, bool)>,
    stops: Vec<&'static str>,
    jogging: bool,
    path_entry_counts: Vec<usize>,
    unit_config: Vec<(MoveParameter, Unit)>,
    gripper_port: u16,
    gripper_connected: bool,
    gripper_active: bool,
    releases: Vec<PositionId>,
}

type SharedState = Arc<Mutex<RobotState>>;

struct MockConnector {
    states: Mutex<HashMap<String, SharedState>>,
}

impl MockConnector {
    fn new() -> Self {
        MockConnector {
            states: Mutex::new(HashMap::new()),
        }
    }

    fn state_for(&self, host: &str) -> SharedState {
        self.states
            .lock()
            .unwrap()
            .entry(host.to_string())
            .or_default()
            .clone()
    }
}

struct MockControl {
    state: SharedState,
}

impl ControlInterface for MockControl {
    fn init_period(&mut self) -> CycleInstant {
        CycleInstant::from_epoch_offset(Duration::from_micros(1_234_567))
    }

    fn wait_period(&mut self, _cycle_start: CycleInstant) {}

    fn stop_script(&mut self) {
        let mut state = self.state.lock().unwrap();
        state.stops.push("script");
        state.jogging = false;
    }

    fn stop_l(&mut self, _deceleration: f64, _asynchronous: bool) {
        self.state.lock().unwrap().stops.push("l");
    }

    fn stop_j(&mut self, _deceleration: f64, _asynchronous: bool) {
        self.state.lock().unwrap().stops.push("j");
    }

    fn move_j(&mut self, q: &Vector6, _s: f64, _a: f64, asynchronous: bool) -> bool {
        self.state.lock().unwrap().moves.push(("move_j", *q, asynchronous));
        true
    }

    fn move_j_ik(&mut self, pose: &Vector6, _s: f64, _a: f64, asynchronous: bool) -> bool {
        self.state.lock().unwrap().moves.push(("move_j_ik", *pose, asynchronous));
        true
    }

    fn move_l(&mut self, pose: &Vector6, _s: f64, _a: f64, asynchronous: bool) -> bool {
        self.state.lock().unwrap().moves.push(("move_l", *pose, asynchronous));
        true
    }

    fn move_l_fk(&mut self, q: &Vector6, _s: f64, _a: f64, asynchronous: bool) -> bool {
        self.state.lock().unwrap().moves.push(("move_l_fk", *q, asynchronous));
        true
    }

    fn jog_start(&mut self, _speeds: &Vector6, _frame: JogFrame) -> bool {
        self.state.lock().unwrap().jogging = true;
        true
    }

    fn jog_stop(&mut self) -> bool {
        self.state.lock().unwrap().jogging = false;
        true
    }

    fn move_path(&mut self, path: &Path, _asynchronous: bool) -> bool {
        self.state.lock().unwrap().path_entry_counts.push(path.len());
        true
    }

    fn async_progress(&mut self) -> i32 {
        -1
    }

    fn inverse_kinematics(
        &mut self,
        pose: &Vector6,
        qnear: Option<&Vector6>,
        _max_position_error: f64,
        _max_orientation_error: f64,
    ) -> Vector6 {
        // Echo the seed when present so the test can tell the variants apart
        qnear.copied().unwrap_or(*pose)
    }
}

struct MockReceive;

impl ReceiveInterface for MockReceive {
    fn is_connected(&mut self) -> bool {
        true
    }

    fn actual_q(&mut self) -> Vector6 {
        [0.0, -1.57, 1.57, 0.0, 1.2, 0.0]
    }

    fn actual_tcp_pose(&mut self) -> Vector6 {
        [0.3, -0.2, 0.5, 1.41, 0.51, -0.56]
    }

    fn is_protective_stopped(&mut self) -> bool {
        false
    }

    fn is_emergency_stopped(&mut self) -> bool {
        false
    }
}

struct MockGripper {
    state: SharedState,
    position: f32,
}

impl GripperController for MockGripper {
    fn connect(&mut self, timeout_ms: u32) -> Result<()> {
        if timeout_ms < 10 {
            return Err(BridgeError::Connection("timed out".to_string()));
        }
        self.state.lock().unwrap().gripper_connected = true;
        Ok(())
    }

    fn disconnect(&mut self) {
        self.state.lock().unwrap().gripper_connected = false;
    }

    fn is_connected(&mut self) -> bool {
        self.state.lock().unwrap().gripper_connected
    }

    fn activate(&mut self, _auto_calibrate: bool) -> Result<()> {
        self.state.lock().unwrap().gripper_active = true;
        Ok(())
    }

    fn is_active(&mut self) -> bool {
        self.state.lock().unwrap().gripper_active
    }

    fn open_position(&mut self) -> f32 {
        0.0
    }

    fn closed_position(&mut self) -> f32 {
        1.0
    }

    fn is_open(&mut self) -> bool {
        self.position <= 0.0
    }

    fn is_closed(&mut self) -> bool {
        self.position >= 1.0
    }

    fn move_to(&mut self, position: f32, _speed: f32, _force: f32, mode: MoveMode) -> ObjectStatus {
        self.position = position;
        match mode {
            MoveMode::StartMove => ObjectStatus::Moving,
            MoveMode::WaitFinished => ObjectStatus::AtDest,
        }
    }

    fn open(&mut self, speed: f32, force: f32, mode: MoveMode) -> ObjectStatus {
        self.move_to(0.0, speed, force, mode)
    }

    fn close(&mut self, speed: f32, force: f32, mode: MoveMode) -> ObjectStatus {
        self.move_to(1.0, speed, force, mode)
    }

    fn emergency_release(&mut self, direction: PositionId, _mode: MoveMode) {
        self.state.lock().unwrap().releases.push(direction);
    }

    fn set_unit(&mut self, parameter: MoveParameter, unit: Unit) {
        self.state.lock().unwrap().unit_config.push((parameter, unit));
    }

    fn set_position_range_mm(&mut self, _range: i32) {}

    fn set_speed(&mut self, speed: f32) -> f32 {
        speed.clamp(0.0, 1.0)
    }

    fn set_force(&mut self, force: f32) -> f32 {
        force.clamp(0.0, 1.0)
    }

    fn object_detection_status(&mut self) -> ObjectStatus {
        ObjectStatus::AtDest
    }

    fn wait_for_motion_complete(&mut self) -> ObjectStatus {
        ObjectStatus::AtDest
    }
}

impl Connector for MockConnector {
    fn control(&self, options: &ConnectOptions) -> Result<Box<dyn ControlInterface>> {
        if options.host == UNREACHABLE {
            return Err(BridgeError::Connection(format!("No route to {}", options.host)));
        }
        Ok(Box::new(MockControl {
            state: self.state_for(&options.host),
        }))
    }

    fn receive(&self, options: &ConnectOptions) -> Result<Box<dyn ReceiveInterface>> {
        if options.host == UNREACHABLE {
            return Err(BridgeError::Connection(format!("No route to {}", options.host)));
        }
        Ok(Box::new(MockReceive))
    }

    fn gripper(&self, options: &GripperOptions) -> Result<Box<dyn GripperController>> {
        if options.host == UNREACHABLE {
            return Err(BridgeError::Connection(format!(
                "No route to {}:{}",
                options.host, options.port
            )));
        }
        let state = self.state_for(&options.host);
        state.lock().unwrap().gripper_port = options.port;
        Ok(Box::new(MockGripper { state, position: 0.0 }))
    }
}

fn connector() -> &'static Arc<MockConnector> {
    static MOCK: OnceLock<Arc<MockConnector>> = OnceLock::new();
    MOCK.get_or_init(|| {
        let mock = Arc::new(MockConnector::new());
        assert!(ffi::install(BridgeContext::new(mock.clone())));
        mock
    })
}

fn c_host(host: &str) -> std::ffi::CString {
    std::ffi::CString::new(host).unwrap()
}

#[test]
fn test_unreachable_address_yields_null_handles_and_no_sessions() {
    let mock = connector();
    let ip = c_host(UNREACHABLE);

    unsafe {
        assert_eq!(urb::ffi::urb_control_new(ip.as_ptr(), false), NULL_HANDLE);
        assert_eq!(urb::ffi::urb_receive_new(ip.as_ptr(), false), NULL_HANDLE);
        assert_eq!(urb::ffi::urb_gripper_new(ip.as_ptr(), 63352, false), NULL_HANDLE);
    }

    // No session was ever opened against the unreachable address
    assert!(!mock.states.lock().unwrap().contains_key(UNREACHABLE));
}

#[test]
fn test_control_lifecycle_and_motion() {
    let mock = connector();
    let ip = c_host("lab-ur5-motion");
    let state = mock.state_for("lab-ur5-motion");

    let handle = unsafe { urb::ffi::urb_control_new(ip.as_ptr(), false) };
    assert_ne!(handle, NULL_HANDLE);
    assert!(ffi::context().unwrap().control().validate(handle));

    let q = [0.0, -1.57, 1.57, 0.0, 1.2, 0.0];
    assert!(unsafe { urb::ffi::urb_control_move_j(handle, q.as_ptr(), 1.05, 1.4, false) });
    assert!(unsafe { urb::ffi::urb_control_move_l(handle, q.as_ptr(), 0.25, 1.2, true) });
    unsafe { urb::ffi::urb_control_stop_l(handle, 10.0, false) };

    {
        let state = state.lock().unwrap();
        assert_eq!(state.moves.len(), 2);
        assert_eq!(state.moves[0], ("move_j", q, false));
        assert_eq!(state.moves[1], ("move_l", q, true));
        assert_eq!(state.stops, vec!["l"]);
    }

    unsafe { urb::ffi::urb_control_delete(handle) };
    assert!(!ffi::context().unwrap().control().validate(handle));

    // Stale handle: sentinel, and nothing new reaches the mock
    assert!(!unsafe { urb::ffi::urb_control_move_j(handle, q.as_ptr(), 1.05, 1.4, false) });
    assert_eq!(state.lock().unwrap().moves.len(), 2);

    // Deleting again is a silent no-op
    unsafe { urb::ffi::urb_control_delete(handle) };
}

#[test]
fn test_cycle_timestamps_truncate_to_milliseconds() {
    let _ = connector();
    let ip = c_host("lab-ur5-clock");

    let handle = unsafe { urb::ffi::urb_control_new(ip.as_ptr(), false) };
    let cycle_start = unsafe { urb::ffi::urb_control_init_period(handle) };
    assert_eq!(cycle_start, 1234);
    unsafe { urb::ffi::urb_control_wait_period(handle, cycle_start) };
    unsafe { urb::ffi::urb_control_delete(handle) };
}

#[test]
fn test_jog_mode_is_persistent_until_stopped() {
    let mock = connector();
    let ip = c_host("lab-ur5-jog");
    let state = mock.state_for("lab-ur5-jog");

    let handle = unsafe { urb::ffi::urb_control_new(ip.as_ptr(), false) };
    let speeds = [0.0, 0.0, 0.05, 0.0, 0.0, 0.0];

    assert!(unsafe { urb::ffi::urb_control_jog_start(handle, speeds.as_ptr(), true) });
    assert!(state.lock().unwrap().jogging);

    assert!(unsafe { urb::ffi::urb_control_jog_stop(handle) });
    assert!(!state.lock().unwrap().jogging);

    // Idempotent stop
    assert!(unsafe { urb::ffi::urb_control_jog_stop(handle) });

    unsafe { urb::ffi::urb_control_delete(handle) };
}

#[test]
fn test_move_path_marshalling_and_contract_check() {
    let mock = connector();
    let ip = c_host("lab-ur5-path");
    let state = mock.state_for("lab-ur5-path");

    let handle = unsafe { urb::ffi::urb_control_new(ip.as_ptr(), false) };

    let move_types = [0i32, 1];
    let position_types = [1i32, 0];
    let counts = [6i32, 6];
    let parameters: Vec<f64> = (0..12).map(f64::from).collect();

    let ok = unsafe {
        urb::ffi::urb_control_move_path(
            handle,
            2,
            move_types.as_ptr(),
            position_types.as_ptr(),
            counts.as_ptr(),
            12,
            parameters.as_ptr(),
            false,
        )
    };
    assert!(ok);
    assert_eq!(state.lock().unwrap().path_entry_counts, vec![2]);

    // One parameter short: refused before the controller sees anything
    let rejected = unsafe {
        urb::ffi::urb_control_move_path(
            handle,
            2,
            move_types.as_ptr(),
            position_types.as_ptr(),
            counts.as_ptr(),
            11,
            parameters.as_ptr(),
            false,
        )
    };
    assert!(!rejected);
    assert_eq!(state.lock().unwrap().path_entry_counts, vec![2]);

    // Out-of-range move type code: same refusal
    let bad_types = [4i32, 1];
    let rejected = unsafe {
        urb::ffi::urb_control_move_path(
            handle,
            2,
            bad_types.as_ptr(),
            position_types.as_ptr(),
            counts.as_ptr(),
            12,
            parameters.as_ptr(),
            false,
        )
    };
    assert!(!rejected);
    assert_eq!(state.lock().unwrap().path_entry_counts, vec![2]);

    unsafe { urb::ffi::urb_control_delete(handle) };
}

#[test]
fn test_inverse_kinematics_seeded_and_unseeded() {
    let _ = connector();
    let ip = c_host("lab-ur5-ik");

    let handle = unsafe { urb::ffi::urb_control_new(ip.as_ptr(), false) };
    let pose = [0.3, -0.2, 0.5, 0.0, 3.14, 0.0];
    let qnear = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6];
    let mut result = [9.0; 6];

    let ok = unsafe {
        urb::ffi::urb_control_inverse_kinematics(
            handle,
            result.as_mut_ptr(),
            pose.as_ptr(),
            std::ptr::null(),
            1e-10,
            1e-10,
        )
    };
    assert!(ok);
    assert_eq!(result, pose);

    let ok = unsafe {
        urb::ffi::urb_control_inverse_kinematics(
            handle,
            result.as_mut_ptr(),
            pose.as_ptr(),
            qnear.as_ptr(),
            1e-10,
            1e-10,
        )
    };
    assert!(ok);
    assert_eq!(result, qnear);

    unsafe { urb::ffi::urb_control_delete(handle) };

    // Invalid handle zero-fills the output
    let ok = unsafe {
        urb::ffi::urb_control_inverse_kinematics(
            handle,
            result.as_mut_ptr(),
            pose.as_ptr(),
            std::ptr::null(),
            1e-10,
            1e-10,
        )
    };
    assert!(!ok);
    assert_eq!(result, [0.0; 6]);
}

#[test]
fn test_telemetry_getters_and_stale_handle_zero_fill() {
    let _ = connector();
    let ip = c_host("lab-ur5-telemetry");

    let handle = unsafe { urb::ffi::urb_receive_new(ip.as_ptr(), false) };
    assert_ne!(handle, NULL_HANDLE);
    assert!(unsafe { urb::ffi::urb_receive_is_connected(handle) });

    let mut q = [9.0; 6];
    assert!(unsafe { urb::ffi::urb_receive_actual_q(handle, q.as_mut_ptr()) });
    assert_eq!(q[1], -1.57);

    let mut pose = [9.0; 6];
    assert!(unsafe { urb::ffi::urb_receive_actual_tcp_pose(handle, pose.as_mut_ptr()) });
    assert_eq!(pose[0], 0.3);

    assert!(!unsafe { urb::ffi::urb_receive_is_protective_stopped(handle) });
    assert!(!unsafe { urb::ffi::urb_receive_is_emergency_stopped(handle) });

    unsafe { urb::ffi::urb_receive_delete(handle) };

    let mut stale = [9.0; 6];
    assert!(!unsafe { urb::ffi::urb_receive_actual_q(handle, stale.as_mut_ptr()) });
    assert_eq!(stale, [0.0; 6]);
    assert!(!unsafe { urb::ffi::urb_receive_is_connected(handle) });
}

#[test]
fn test_gripper_flow_over_the_c_surface() {
    let mock = connector();
    let ip = c_host("lab-gripper");
    let state = mock.state_for("lab-gripper");

    // port <= 0 selects the configured default
    let handle = unsafe { urb::ffi::urb_gripper_new(ip.as_ptr(), -1, false) };
    assert_ne!(handle, NULL_HANDLE);
    assert_eq!(state.lock().unwrap().gripper_port, 63352);

    assert!(unsafe { urb::ffi::urb_gripper_connect(handle, 2000) });
    assert!(unsafe { urb::ffi::urb_gripper_is_connected(handle) });
    assert!(unsafe { urb::ffi::urb_gripper_activate(handle, true) });
    assert!(unsafe { urb::ffi::urb_gripper_is_active(handle) });

    // StartMove admits and reports motion; WaitFinished reports arrival
    assert_eq!(unsafe { urb::ffi::urb_gripper_move(handle, 0.5, 0.7, 0.3, 0) }, 0);
    assert_eq!(unsafe { urb::ffi::urb_gripper_close(handle, 0.7, 0.3, 1) }, 3);
    assert!(unsafe { urb::ffi::urb_gripper_is_closed(handle) });

    unsafe { urb::ffi::urb_gripper_set_unit(handle, 0, 3) };
    assert_eq!(
        state.lock().unwrap().unit_config,
        vec![(MoveParameter::Position, Unit::Mm)]
    );

    // Malformed codes are refused without reaching the gripper
    unsafe { urb::ffi::urb_gripper_set_unit(handle, 0, 9) };
    assert_eq!(state.lock().unwrap().unit_config.len(), 1);
    assert_eq!(unsafe { urb::ffi::urb_gripper_move(handle, 0.5, 0.7, 0.3, 5) }, 3);

    unsafe { urb::ffi::urb_gripper_emergency_release(handle, 0, 1) };
    assert_eq!(state.lock().unwrap().releases, vec![PositionId::Open]);

    assert_eq!(unsafe { urb::ffi::urb_gripper_set_speed(handle, 1.5) }, 1.0);
    assert_eq!(unsafe { urb::ffi::urb_gripper_object_detection_status(handle) }, 3);

    unsafe { urb::ffi::urb_gripper_delete(handle) };

    // Stale handle: status queries fall back to AtDest, setters to zero
    assert_eq!(unsafe { urb::ffi::urb_gripper_object_detection_status(handle) }, 3);
    assert_eq!(unsafe { urb::ffi::urb_gripper_wait_for_motion_complete(handle) }, 3);
    assert_eq!(unsafe { urb::ffi::urb_gripper_set_speed(handle, 0.5) }, 0.0);
    assert!(!unsafe { urb::ffi::urb_gripper_is_connected(handle) });
}

#[test]
fn test_null_ip_falls_back_to_configured_default() {
    let mock = connector();

    let handle = unsafe { urb::ffi::urb_control_new(std::ptr::null(), false) };
    assert_ne!(handle, NULL_HANDLE);

    // The compiled-in development default was used as the host
    assert!(mock
        .states
        .lock()
        .unwrap()
        .contains_key(urb::config::DEFAULT_ROBOT_HOST));

    unsafe { urb::ffi::urb_control_delete(handle) };
}
