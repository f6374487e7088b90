//! # Signature Export
//!
//! Turns a captured [`signature_core::Drawing`] into files a host can put on
//! the clipboard or save: an SVG document built from the drawing's path data,
//! and (with the `png` feature) a rasterized PNG of that document.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod export;

pub use error::{ExportError, ExportResult};
pub use export::{ExportConfig, ExportFormat, SignatureExporter};
