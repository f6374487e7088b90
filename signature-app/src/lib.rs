//! # Signature App WASM bindings
//!
//! Thin adapter between a web or webview host and `signature-core`: pointer
//! records come in as `(phase, x, y)`, path data goes back out through a
//! JavaScript callback.
//!
//! ## Usage
//!
//! Build for WASM:
//! ```bash
//! wasm-pack build --target web signature-app
//! ```
//!
//! Then wire it to a surface in JavaScript:
//! ```javascript
//! import init, { SignatureApp } from './pkg/signature_app.js';
//!
//! await init();
//! const app = new SignatureApp('{"stroke_color":"#1e3a8a","stroke_width":2}');
//! app.setOnChange((d) => path.setAttribute('d', d));
//!
//! surface.onpointerdown = (e) => app.handlePointer('start', e.offsetX, e.offsetY);
//! surface.onpointermove = (e) => app.handlePointer('move', e.offsetX, e.offsetY);
//! surface.onpointerup = (e) => app.handlePointer('end', e.offsetX, e.offsetY);
//! surface.onpointercancel = (e) => app.handlePointer('cancel', e.offsetX, e.offsetY);
//!
//! navigator.clipboard.writeText(app.toSvg());
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::{cell::RefCell, rc::Rc};

use signature_core::{Drawing, PointerEvent, SignaturePad, StyleConfig, TouchPhase};
use signature_export::SignatureExporter;
use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init_wasm() {
    console_error_panic_hook::set_once();
    tracing::info!("Signature app WASM initialized");
}

type CallbackSlot = Rc<RefCell<Option<js_sys::Function>>>;

/// A signature surface driven from JavaScript.
#[wasm_bindgen]
pub struct SignatureApp {
    pad: SignaturePad,
    exporter: SignatureExporter,
    on_change: CallbackSlot,
}

#[wasm_bindgen]
impl SignatureApp {
    /// Create a new signature surface.
    ///
    /// `style_json` is a style configuration object; an empty string selects
    /// the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error string if the style cannot be parsed or is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(style_json: &str) -> Result<SignatureApp, String> {
        let style = if style_json.trim().is_empty() {
            StyleConfig::default()
        } else {
            StyleConfig::from_json(style_json).map_err(|e| e.to_string())?
        };
        let mut pad = SignaturePad::new(style).map_err(|e| e.to_string())?;

        let on_change: CallbackSlot = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&on_change);
        pad.on_change(move |drawing: &Drawing| {
            if let Some(callback) = slot.borrow().as_ref() {
                let data = JsValue::from_str(&drawing.to_path_data());
                if let Err(e) = callback.call1(&JsValue::NULL, &data) {
                    tracing::warn!("onChange callback threw: {e:?}");
                }
            }
        });

        Ok(Self {
            pad,
            exporter: SignatureExporter::with_defaults(),
            on_change,
        })
    }

    /// Feed one pointer record.
    ///
    /// `phase` accepts `start`/`began`/`down`, `move`/`moved`,
    /// `end`/`ended`/`up` and `cancel`/`cancelled`.
    ///
    /// # Errors
    ///
    /// Returns an error string for an unknown phase or a second simultaneous
    /// contact.
    #[wasm_bindgen(js_name = handlePointer)]
    pub fn handle_pointer(&mut self, phase: &str, x: f32, y: f32) -> Result<(), String> {
        let phase = phase.parse::<TouchPhase>().map_err(|e| e.to_string())?;
        self.pad
            .handle_event(&PointerEvent::new(phase, x, y))
            .map_err(|e| e.to_string())
    }

    /// Clear the drawing.
    pub fn reset(&mut self) {
        self.pad.reset();
    }

    /// Register the function called with the current path data after every
    /// change. Replaces any previous callback.
    #[wasm_bindgen(js_name = setOnChange)]
    pub fn set_on_change(&mut self, callback: js_sys::Function) {
        *self.on_change.borrow_mut() = Some(callback);
    }

    /// Stop calling the change callback.
    #[wasm_bindgen(js_name = clearOnChange)]
    pub fn clear_on_change(&mut self) {
        self.on_change.borrow_mut().take();
    }

    /// SVG path data for everything drawn so far.
    #[wasm_bindgen(js_name = getPathData)]
    #[must_use]
    pub fn get_path_data(&self) -> String {
        self.pad.drawing().to_path_data()
    }

    /// The drawing as structured JSON commands.
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    #[wasm_bindgen(js_name = getDrawingJson)]
    pub fn get_drawing_json(&self) -> Result<String, String> {
        self.pad.drawing().to_json().map_err(|e| e.to_string())
    }

    /// Number of strokes, including one in progress.
    #[wasm_bindgen(js_name = strokeCount)]
    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.pad.drawing().stroke_count()
    }

    /// Whether a finger is currently down.
    #[wasm_bindgen(js_name = isDrawing)]
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.pad.is_drawing()
    }

    /// The active style as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    #[wasm_bindgen(js_name = getStyleJson)]
    pub fn get_style_json(&self) -> Result<String, String> {
        serde_json::to_string(self.pad.style()).map_err(|e| e.to_string())
    }

    /// Export the drawing as an SVG document, e.g. for the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error string if export fails.
    #[wasm_bindgen(js_name = toSvg)]
    pub fn to_svg(&self) -> Result<String, String> {
        self.exporter
            .render_to_svg(&self.pad.drawing(), self.pad.style())
            .map_err(|e| e.to_string())
    }
}
