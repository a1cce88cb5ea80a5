//! # usher-core: Pure Check-In Logic for Usher
//!
//! This crate is the **heart** of Usher. It contains the check-in logic
//! as pure functions and state transitions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Usher Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Host UI (scanner screen)                     │   │
//! │  │    Start Scan ──► Camera Frames ──► Result Card ──► Process    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ decode / error callbacks               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    usher-scan (integration)                     │   │
//! │  │    ScanController, CameraControl, DeviceFault, presenter        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ usher-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   scan    │  │ classify  │  │  meeting  │  │ validation│  │   │
//! │  │   │ ScanState │  │ ErrorKind │  │ link URLs │  │   rules   │  │   │
//! │  │   │  Session  │  │ messages  │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CAMERA • NO NETWORK • PURE TRANSITIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`scan`] - The scan session state machine (`ScanState`, `ScanSession`)
//! - [`classify`] - Decoder error classification and user messages
//! - [`meeting`] - Virtual-meeting link resolution
//! - [`validation`] - Field-presence validation for auth forms
//! - [`types`] - Shared domain types (`UserAccount`, `ScanResult`)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: every operation is deterministic; camera side
//!    effects are *returned* as [`scan::CameraCommand`] values, never performed
//! 2. **No Impossible States**: the session is a tagged variant, so a stored
//!    result while actively scanning cannot be represented
//! 3. **No-op on Invalid Events**: events that are not valid for the current
//!    state leave it unchanged - never a panic, never an error
//! 4. **Explicit Errors**: all errors are typed, never strings or panics

pub mod classify;
pub mod error;
pub mod meeting;
pub mod scan;
pub mod types;
pub mod validation;

// Re-exports for convenience, so users can do `use usher_core::ScanState`
// instead of `use usher_core::scan::ScanState`.

pub use classify::{classify, ScanErrorKind};
pub use error::{CoreError, ValidationError};
pub use scan::{CameraCommand, ScanSession, ScanState, Transition};
pub use types::{ScanResult, UserAccount};

/// Name of the cookie that carries the signed-in user record.
///
/// The gate middleware and the auth routes must agree on this name; the
/// cookie holds a JSON object with a required `fullName` field.
pub const USER_COOKIE: &str = "user";

/// Default auth cookie lifetime in days.
///
/// Matches the 30-day default expiry of the auth cookie store contract.
pub const AUTH_COOKIE_MAX_AGE_DAYS: i64 = 30;
