//! # usher-scan: Camera Integration for Usher
//!
//! Wires the pure scan state machine from `usher-core` to a real
//! camera/decoder widget.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Scan Event Flow                                   │
//! │                                                                         │
//! │  Camera widget                 ScanController            ScanSession    │
//! │  ─────────────                 ──────────────            ───────────    │
//! │                                                                         │
//! │  (user taps Scan) ───────────► start_scan() ───────────► Scanning      │
//! │                    activate ◄───── executes command                     │
//! │                                                                         │
//! │  onScan("TCKT-1") ───────────► handle_decoded() ───────► Result        │
//! │                     release ◄───── executes command                     │
//! │                                                                         │
//! │  onError(fault) ─────────────► handle_error() ─────────► Idle / stays  │
//! │                     release ◄───── (fatal kinds only)                   │
//! │                                                                         │
//! │  (teardown) ─────────────────► drop ───────────────────► release       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The controller is the only code that touches the camera; callers never
//! issue activate/release themselves. That keeps the scoped-acquisition
//! contract (acquire on entering `Scanning`, release on every exit) in one
//! place.

pub mod controller;
pub mod device;
pub mod presenter;

pub use controller::{ScanController, ScannerState, SessionView};
pub use device::{CameraControl, DeviceFault};
pub use presenter::{process, ResultAction, ResultView};
