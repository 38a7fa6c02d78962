//! 2D canvas surface used by the per-frame game views.

use std::f64::consts::TAU;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures acquiring or drawing into a canvas.
pub enum SurfaceError {
    /// The browser refused to hand out a 2D context.
    #[error("2d rendering context unavailable")]
    ContextUnavailable,
    /// A canvas API call threw.
    #[error("canvas call failed: {0}")]
    Js(String),
}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[derive(Clone)]
/// A mounted canvas element paired with its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquires the 2D context for `canvas`.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let context = canvas
            .get_context("2d")?
            .ok_or(SurfaceError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::ContextUnavailable)?;
        Ok(Self { canvas, context })
    }

    /// Resizes the backing store to the element's laid-out size and returns `(width, height)`.
    pub fn fit_to_layout(&self) -> (f64, f64) {
        let rect = self.canvas.get_bounding_client_rect();
        let width = rect.width().max(0.0);
        let height = rect.height().max(0.0);
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        (width, height)
    }

    /// Sizes the backing store to the full browser viewport and returns `(width, height)`.
    pub fn fit_to_viewport(&self) -> (f64, f64) {
        let (width, height) = web_sys::window()
            .map(|window| {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0);
                (width, height)
            })
            .unwrap_or((0.0, 0.0));
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        (width, height)
    }

    /// Backing-store width in pixels.
    pub fn width(&self) -> f64 {
        f64::from(self.canvas.width())
    }

    /// Backing-store height in pixels.
    pub fn height(&self) -> f64 {
        f64::from(self.canvas.height())
    }

    /// Raw context for drawing calls not covered here.
    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.context
    }

    /// Clears the whole surface.
    pub fn clear(&self) {
        self.context.clear_rect(0.0, 0.0, self.width(), self.height());
    }

    /// Fills an axis-aligned rectangle.
    pub fn fill_rect(&self, color: &str, x: f64, y: f64, w: f64, h: f64) {
        self.context.set_fill_style_str(color);
        self.context.fill_rect(x, y, w, h);
    }

    /// Fills a circle, optionally stroking its outline.
    pub fn fill_circle(
        &self,
        color: &str,
        x: f64,
        y: f64,
        radius: f64,
        stroke: Option<(&str, f64)>,
    ) -> Result<(), SurfaceError> {
        self.context.begin_path();
        self.context.arc(x, y, radius, 0.0, TAU)?;
        self.context.set_fill_style_str(color);
        self.context.fill();
        if let Some((stroke_color, line_width)) = stroke {
            self.context.set_stroke_style_str(stroke_color);
            self.context.set_line_width(line_width);
            self.context.stroke();
        }
        Ok(())
    }

    /// Draws a text run with the given font and alignment.
    pub fn fill_text(
        &self,
        text: &str,
        x: f64,
        y: f64,
        color: &str,
        font: &str,
        align: &str,
    ) -> Result<(), SurfaceError> {
        self.context.set_fill_style_str(color);
        self.context.set_font(font);
        self.context.set_text_align(align);
        self.context.fill_text(text, x, y)?;
        Ok(())
    }

    /// Strokes a single straight line.
    pub fn line(&self, color: &str, from: (f64, f64), to: (f64, f64)) {
        self.context.set_stroke_style_str(color);
        self.context.begin_path();
        self.context.move_to(from.0, from.1);
        self.context.line_to(to.0, to.1);
        self.context.stroke();
    }

    /// Sets the global alpha for subsequent draws.
    pub fn set_alpha(&self, alpha: f64) {
        self.context.set_global_alpha(alpha.clamp(0.0, 1.0));
    }
}
