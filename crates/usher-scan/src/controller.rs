//! # Scan Controller
//!
//! Drives a [`CameraControl`] device from the pure session state machine.
//!
//! ## Scoped Camera Acquisition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Camera Acquisition Contract                            │
//! │                                                                         │
//! │  Enter Scanning            Exit Scanning                                │
//! │  ──────────────            ─────────────                                │
//! │  start_scan  ─► activate   handle_decoded ─► release                    │
//! │  scan_again  ─► activate   fatal fault    ─► release                    │
//! │                            cancel         ─► release                    │
//! │                            drop           ─► release                    │
//! │                                                                         │
//! │  The camera commands come out of ScanSession transitions; this          │
//! │  controller executes them immediately and nowhere else touches the      │
//! │  device. Release must therefore hold on every exit path by              │
//! │  construction, not by bookkeeping at each call site.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use usher_core::scan::{CameraCommand, ScanSession, ScanStatus};
use usher_core::types::ScanResult;

use crate::device::{CameraControl, DeviceFault};

/// Serializable snapshot of the session, handed to the UI after every
/// operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// Current session status
    pub status: ScanStatus,

    /// Decoded code, present only in `ResultAvailable`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// User-facing notice from the last operation, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// One scan session bound to one camera device.
///
/// All camera commands emitted by the session are executed here, in the
/// same call that produced them. Dropping the controller mid-scan releases
/// the camera.
#[derive(Debug)]
pub struct ScanController<C: CameraControl> {
    session: ScanSession,
    camera: C,
}

impl<C: CameraControl> ScanController<C> {
    /// Creates an idle controller around a camera device.
    pub fn new(camera: C) -> Self {
        ScanController {
            session: ScanSession::new(),
            camera,
        }
    }

    /// Starts a scan, activating the camera.
    pub fn start_scan(&mut self) -> SessionView {
        debug!("start_scan");
        let t = self.session.start_scan();
        self.apply(t)
    }

    /// Forwards a decode event from the camera widget.
    ///
    /// Late events (after cancel, or while a result is already shown) are
    /// ignored by the session and leave the camera untouched.
    pub fn handle_decoded(&mut self, code: &str) -> SessionView {
        debug!(code = %code, "decode event");
        let t = self.session.on_decoded(code);
        self.apply(t)
    }

    /// Forwards a fault from the camera widget.
    ///
    /// Fatal faults abort the session; `Other` faults are logged and
    /// swallowed so the decoder can keep attempting frames.
    pub fn handle_error(&mut self, fault: DeviceFault) -> SessionView {
        let kind = fault.kind();
        if kind.is_fatal() {
            warn!(%fault, ?kind, "camera fault, aborting scan");
        } else {
            debug!(%fault, "transient decoder error, continuing");
        }
        let t = self.session.on_error(kind);
        self.apply(t)
    }

    /// Cancels the session, releasing the camera if it was active.
    pub fn cancel(&mut self) -> SessionView {
        debug!("cancel");
        let t = self.session.cancel();
        self.apply(t)
    }

    /// Discards the shown result and starts scanning again.
    pub fn scan_again(&mut self) -> SessionView {
        debug!("scan_again");
        let t = self.session.scan_again();
        self.apply(t)
    }

    /// Dismisses the shown result and returns to idle.
    pub fn dismiss(&mut self) -> SessionView {
        debug!("dismiss");
        let t = self.session.dismiss();
        self.apply(t)
    }

    /// The held result, if any.
    pub fn result(&self) -> Option<&ScanResult> {
        self.session.result()
    }

    /// Snapshot of the current state with no notice.
    pub fn view(&self) -> SessionView {
        SessionView {
            status: self.session.state().status(),
            code: self.session.result().map(|r| r.code.clone()),
            notice: None,
        }
    }

    fn apply(&mut self, t: usher_core::scan::Transition) -> SessionView {
        match t.camera {
            Some(CameraCommand::Activate) => self.camera.activate(),
            Some(CameraCommand::Release) => self.camera.release(),
            None => {}
        }
        SessionView {
            notice: t.notice.map(str::to_string),
            ..self.view()
        }
    }
}

impl<C: CameraControl> Drop for ScanController<C> {
    fn drop(&mut self) {
        // Component teardown mid-scan must still release the camera
        if self.session.is_scanning() {
            self.camera.release();
        }
    }
}

/// Shared scanner state for hosts that dispatch commands concurrently.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<T>>` because:
/// - `Arc`: allows shared ownership across handler invocations
/// - `Mutex`: only one event may mutate the session at a time, which is the
///   single-consumer dispatch model the session expects
#[derive(Debug)]
pub struct ScannerState<C: CameraControl> {
    inner: Arc<Mutex<ScanController<C>>>,
}

// Manual impl: a derived Clone would demand C: Clone, but only the Arc is
// cloned here.
impl<C: CameraControl> Clone for ScannerState<C> {
    fn clone(&self) -> Self {
        ScannerState {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: CameraControl> ScannerState<C> {
    /// Wraps a controller for shared access.
    pub fn new(controller: ScanController<C>) -> Self {
        ScannerState {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// Executes a function with exclusive access to the controller.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let view = scanner.with_controller(|c| c.start_scan());
    /// ```
    pub fn with_controller<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ScanController<C>) -> R,
    {
        let mut controller = self.inner.lock().expect("Scanner mutex poisoned");
        f(&mut controller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Camera double that records activate/release calls.
    #[derive(Debug, Default)]
    struct RecordingCamera {
        active: bool,
        activations: u32,
        releases: u32,
    }

    impl CameraControl for RecordingCamera {
        fn activate(&mut self) {
            self.active = true;
            self.activations += 1;
        }

        fn release(&mut self) {
            self.active = false;
            self.releases += 1;
        }
    }

    fn controller() -> ScanController<RecordingCamera> {
        ScanController::new(RecordingCamera::default())
    }

    #[test]
    fn test_start_scan_activates_camera() {
        let mut c = controller();
        let view = c.start_scan();

        assert_eq!(view.status, ScanStatus::Scanning);
        assert!(c.camera.active);
        assert_eq!(c.camera.activations, 1);
    }

    #[test]
    fn test_decode_releases_camera_and_shows_code() {
        let mut c = controller();
        c.start_scan();
        let view = c.handle_decoded("TCKT-00042");

        assert_eq!(view.status, ScanStatus::ResultAvailable);
        assert_eq!(view.code.as_deref(), Some("TCKT-00042"));
        assert!(!c.camera.active);
        assert_eq!(c.camera.releases, 1);
    }

    #[test]
    fn test_fatal_fault_releases_camera_and_carries_notice() {
        let mut c = controller();
        c.start_scan();
        let view = c.handle_error(DeviceFault::PermissionDenied);

        assert_eq!(view.status, ScanStatus::Idle);
        assert_eq!(
            view.notice.as_deref(),
            Some("camera access must be allowed to scan codes.")
        );
        assert!(!c.camera.active);
    }

    #[test]
    fn test_transient_fault_keeps_camera_active() {
        let mut c = controller();
        c.start_scan();
        let view = c.handle_error(DeviceFault::Other("frame noise".to_string()));

        assert_eq!(view.status, ScanStatus::Scanning);
        assert_eq!(view.notice, None);
        assert!(c.camera.active);
        assert_eq!(c.camera.releases, 0);
    }

    #[test]
    fn test_cancel_then_late_decode_is_ignored() {
        let mut c = controller();
        c.start_scan();
        c.cancel();
        assert!(!c.camera.active);

        // The widget's decode callback races cancellation and lands late
        let view = c.handle_decoded("TCKT-00042");
        assert_eq!(view.status, ScanStatus::Idle);
        assert_eq!(view.code, None);
        // No spurious camera commands either
        assert_eq!(c.camera.activations, 1);
        assert_eq!(c.camera.releases, 1);
    }

    #[test]
    fn test_scan_again_reactivates_camera() {
        let mut c = controller();
        c.start_scan();
        c.handle_decoded("TCKT-1");
        let view = c.scan_again();

        assert_eq!(view.status, ScanStatus::Scanning);
        assert_eq!(view.code, None);
        assert!(c.camera.active);
        assert_eq!(c.camera.activations, 2);
    }

    #[test]
    fn test_dismiss_leaves_camera_untouched() {
        let mut c = controller();
        c.start_scan();
        c.handle_decoded("TCKT-1");
        let releases_before = c.camera.releases;

        let view = c.dismiss();
        assert_eq!(view.status, ScanStatus::Idle);
        assert_eq!(c.camera.releases, releases_before);
    }

    #[test]
    fn test_drop_mid_scan_releases_camera() {
        static RELEASES: AtomicU32 = AtomicU32::new(0);

        struct CountingCamera;
        impl CameraControl for CountingCamera {
            fn activate(&mut self) {}
            fn release(&mut self) {
                RELEASES.fetch_add(1, Ordering::SeqCst);
            }
        }

        {
            let mut c = ScanController::new(CountingCamera);
            c.start_scan();
        } // dropped while Scanning
        assert_eq!(RELEASES.load(Ordering::SeqCst), 1);

        {
            let mut c = ScanController::new(CountingCamera);
            c.start_scan();
            c.handle_decoded("TCKT-1");
        } // dropped while ResultAvailable: already released, no double call
        assert_eq!(RELEASES.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_shared_state_dispatch() {
        let scanner = ScannerState::new(controller());

        let view = scanner.with_controller(|c| c.start_scan());
        assert_eq!(view.status, ScanStatus::Scanning);

        let view = scanner.with_controller(|c| c.handle_decoded("TCKT-9"));
        assert_eq!(view.code.as_deref(), Some("TCKT-9"));
    }
}
