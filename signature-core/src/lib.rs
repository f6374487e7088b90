//! # Signature Core
//!
//! Turns a stream of single-pointer touch samples into smooth vector curves.
//! Host-agnostic: the host feeds pointer events in, and reads path data out.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               signature-core                │
//! ├─────────────────────────────────────────────┤
//! │  PointerEvent ──▶ SignaturePad              │
//! │                   ├─ StrokeAccumulator      │
//! │                   │   ├─ PointBuffer        │
//! │                   │   └─ CurvePath (M / Q)  │
//! │                   └─ ChangeNotifier ──▶ host│
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use signature_core::{PointerEvent, SignaturePad, StyleConfig};
//!
//! let mut pad = SignaturePad::new(StyleConfig::default()).unwrap();
//! pad.handle_event(&PointerEvent::start(0.0, 0.0)).unwrap();
//! pad.handle_event(&PointerEvent::moved(10.0, 0.0)).unwrap();
//! pad.handle_event(&PointerEvent::end(10.0, 0.0)).unwrap();
//!
//! assert_eq!(pad.drawing().to_path_data(), "M0,0 Q0,0 5,0");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod buffer;
pub mod curve;
pub mod drawing;
pub mod error;
pub mod event;
pub mod notifier;
pub mod pad;
pub mod style;

pub use buffer::PointBuffer;
pub use curve::{CurvePath, PathCommand};
pub use drawing::{Drawing, StrokeAccumulator};
pub use error::{SignatureError, SignatureResult};
pub use event::{Point, PointerEvent, TouchPhase};
pub use notifier::{ChangeNotifier, DrawingListener};
pub use pad::SignaturePad;
pub use style::StyleConfig;

/// Signature core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
