//! # Scan Session State Machine
//!
//! The single source of truth for the check-in scan lifecycle.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Scan Session Lifecycle                               │
//! │                                                                         │
//! │                 start_scan                on_decoded(v)                 │
//! │   ┌──────────┐ ──────────► ┌──────────┐ ──────────► ┌────────────────┐ │
//! │   │   Idle   │             │ Scanning │             │ ResultAvailable│ │
//! │   └──────────┘ ◄────────── └──────────┘ ◄────────── └────────────────┘ │
//! │        ▲        cancel /        │         scan_again         │          │
//! │        │        fatal error     │                            │          │
//! │        └────────────────────────┴──────── dismiss ───────────┘          │
//! │                                           cancel                        │
//! │                                                                         │
//! │   CAMERA: active only while Scanning.                                  │
//! │   Every arrow entering Scanning carries CameraCommand::Activate,       │
//! │   every arrow leaving it carries CameraCommand::Release.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Commands Instead of Side Effects?
//! This crate performs no I/O. Each operation returns a [`Transition`]
//! describing what the host must do to the camera and what (if anything) to
//! tell the operator. The integration layer (`usher-scan`) executes the
//! command immediately, which is what makes the acquire-on-enter /
//! release-on-every-exit contract checkable in plain unit tests.
//!
//! ## Guarantee
//! No operation can leave the session in an undefined state. Events that are
//! not valid for the current state are no-ops - never faults.

use serde::{Deserialize, Serialize};

use crate::classify::ScanErrorKind;
use crate::types::ScanResult;

/// The scan session state.
///
/// Modeled as a tagged variant so impossible combinations (a stored result
/// while actively scanning, a camera "active" flag with no session) cannot
/// be represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanState {
    /// No scan in progress, no result held
    #[default]
    Idle,

    /// Camera active, waiting for a decode or error event
    Scanning,

    /// A code was decoded and is held until dismissed or re-scanned
    ResultAvailable {
        /// The decoded code
        result: ScanResult,
    },
}

impl ScanState {
    /// Discriminant-only view for snapshots and logging.
    pub fn status(&self) -> ScanStatus {
        match self {
            ScanState::Idle => ScanStatus::Idle,
            ScanState::Scanning => ScanStatus::Scanning,
            ScanState::ResultAvailable { .. } => ScanStatus::ResultAvailable,
        }
    }
}

/// Serializable discriminant of [`ScanState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScanStatus {
    Idle,
    Scanning,
    ResultAvailable,
}

/// Camera instruction emitted by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraCommand {
    /// Request camera activation from the capture widget
    Activate,

    /// Command the capture widget to stop and release the camera
    Release,
}

/// The outcome of feeding one event to the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transition {
    /// What the host must do to the camera, if anything
    pub camera: Option<CameraCommand>,

    /// User-facing notice to display, if any
    pub notice: Option<&'static str>,
}

impl Transition {
    /// A transition with no camera command and no notice (the no-op case).
    pub fn none() -> Self {
        Transition::default()
    }

    fn camera(command: CameraCommand) -> Self {
        Transition {
            camera: Some(command),
            notice: None,
        }
    }
}

/// The scan session state machine.
///
/// Holds the current [`ScanState`] and applies events to it. One session
/// exists per scanner UI instance; all events arrive on a single cooperative
/// event loop, so the machine itself needs no synchronization (the
/// integration layer adds a mutex where hosts dispatch concurrently).
#[derive(Debug, Clone, Default)]
pub struct ScanSession {
    state: ScanState,
}

impl ScanSession {
    /// Creates a new session in `Idle`.
    pub fn new() -> Self {
        ScanSession {
            state: ScanState::Idle,
        }
    }

    /// The current state.
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// The held result, if the session is in `ResultAvailable`.
    pub fn result(&self) -> Option<&ScanResult> {
        match &self.state {
            ScanState::ResultAvailable { result } => Some(result),
            _ => None,
        }
    }

    /// Whether the camera should currently be active.
    pub fn is_scanning(&self) -> bool {
        matches!(self.state, ScanState::Scanning)
    }

    /// Starts a scan.
    ///
    /// Valid from `Idle` or `ResultAvailable` (discarding any held result).
    /// Transitions to `Scanning` and requests camera activation. A no-op if
    /// already scanning.
    pub fn start_scan(&mut self) -> Transition {
        match self.state {
            ScanState::Idle | ScanState::ResultAvailable { .. } => {
                self.state = ScanState::Scanning;
                Transition::camera(CameraCommand::Activate)
            }
            ScanState::Scanning => Transition::none(),
        }
    }

    /// Handles a successful decode event.
    ///
    /// Valid only while `Scanning`: stores the code, transitions to
    /// `ResultAvailable`, and releases the camera. Decode events received in
    /// any other state are ignored - in particular, a late callback arriving
    /// after `cancel()` must not resurrect a result.
    pub fn on_decoded(&mut self, code: impl Into<String>) -> Transition {
        match self.state {
            ScanState::Scanning => {
                self.state = ScanState::ResultAvailable {
                    result: ScanResult::new(code),
                };
                Transition::camera(CameraCommand::Release)
            }
            _ => Transition::none(),
        }
    }

    /// Handles a classified decoder error.
    ///
    /// Valid only while `Scanning`. Fatal kinds end the session: back to
    /// `Idle`, camera released, notice surfaced. `Other` is transient noise:
    /// the session stays `Scanning`, the camera stays active, and nothing is
    /// shown - more frames will simply be attempted.
    pub fn on_error(&mut self, kind: ScanErrorKind) -> Transition {
        match self.state {
            ScanState::Scanning if kind.is_fatal() => {
                self.state = ScanState::Idle;
                Transition {
                    camera: Some(CameraCommand::Release),
                    notice: kind.user_message(),
                }
            }
            _ => Transition::none(),
        }
    }

    /// Cancels the session.
    ///
    /// Valid from any state: transitions to `Idle`, discards any held
    /// result, and releases the camera if it was active.
    pub fn cancel(&mut self) -> Transition {
        let was_scanning = self.is_scanning();
        self.state = ScanState::Idle;
        if was_scanning {
            Transition::camera(CameraCommand::Release)
        } else {
            Transition::none()
        }
    }

    /// Discards the held result and starts a new scan.
    ///
    /// Valid only from `ResultAvailable`; a no-op otherwise.
    pub fn scan_again(&mut self) -> Transition {
        match self.state {
            ScanState::ResultAvailable { .. } => self.start_scan(),
            _ => Transition::none(),
        }
    }

    /// Discards the held result and returns to `Idle`.
    ///
    /// Valid only from `ResultAvailable`; a no-op otherwise. The camera was
    /// already released when the result arrived, so no command is emitted.
    pub fn dismiss(&mut self) -> Transition {
        match self.state {
            ScanState::ResultAvailable { .. } => {
                self.state = ScanState::Idle;
                Transition::none()
            }
            _ => Transition::none(),
        }
    }
}
