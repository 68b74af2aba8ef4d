use glam::Vec2;
use rand::Rng;
use sticker_core::{backing_size, is_blank, StrokeColor, SurfaceError, STROKE_WIDTH};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Freehand stroke capture over the drawing canvas. Strokes render
/// immediately; the surface doubles as the export source for new stickers.
pub struct Sketch {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    color: StrokeColor,
    drawing: bool,
}

impl Sketch {
    pub fn new(canvas: web::HtmlCanvasElement, rng: &mut impl Rng) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

        let mut sketch = Self {
            canvas,
            ctx,
            color: StrokeColor::random(rng),
            drawing: false,
        };
        sketch.sync_backing_size();
        sketch.apply_stroke_settings();
        Ok(sketch)
    }

    /// Match the backing store to CSS size * devicePixelRatio. Resizing a
    /// canvas wipes its bitmap and resets the 2D context to defaults, so
    /// the stroke settings are re-applied afterwards; an unchanged size is
    /// left alone to keep the current drawing.
    pub fn sync_backing_size(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let rect = self.canvas.get_bounding_client_rect();
        let (w, h) = backing_size(rect.width(), rect.height(), window.device_pixel_ratio());
        if w == self.canvas.width() && h == self.canvas.height() {
            return;
        }
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        self.drawing = false;
        self.apply_stroke_settings();
    }

    fn apply_stroke_settings(&self) {
        self.ctx.set_line_width(STROKE_WIDTH);
        self.ctx.set_line_join("round");
        self.ctx.set_line_cap("round");
        self.apply_color();
    }

    fn apply_color(&self) {
        self.ctx.set_stroke_style_str(&self.color.css());
    }

    pub fn color(&self) -> StrokeColor {
        self.color
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Map a pointer event to backing-pixel coordinates on the canvas.
    pub fn pointer_px(&self, ev: &web::PointerEvent) -> Vec2 {
        let rect = self.canvas.get_bounding_client_rect();
        let x_css = ev.client_x() as f32 - rect.left() as f32;
        let y_css = ev.client_y() as f32 - rect.top() as f32;
        let sx = (x_css / rect.width().max(1.0) as f32) * self.canvas.width() as f32;
        let sy = (y_css / rect.height().max(1.0) as f32) * self.canvas.height() as f32;
        Vec2::new(sx, sy)
    }

    pub fn begin(&mut self, p: Vec2) {
        self.drawing = true;
        self.ctx.begin_path();
        self.ctx.move_to(p.x as f64, p.y as f64);
    }

    pub fn extend(&mut self, p: Vec2) {
        if !self.drawing {
            return;
        }
        self.ctx.line_to(p.x as f64, p.y as f64);
        self.ctx.stroke();
    }

    pub fn end(&mut self) {
        self.drawing = false;
    }

    /// Blank iff no pixel differs from the fully transparent initial state.
    pub fn is_blank(&self) -> bool {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        if w == 0 || h == 0 {
            return true;
        }
        match self.ctx.get_image_data(0.0, 0.0, w as f64, h as f64) {
            Ok(image) => is_blank(&image.data()),
            Err(e) => {
                log::warn!("[sketch] pixel read failed: {e:?}");
                true
            }
        }
    }

    /// Export the drawing as an encoded image. Blank surfaces are a caller
    /// error, reported as a typed result so the UI can prompt.
    pub fn export_image(&self) -> Result<String, SurfaceError> {
        if self.is_blank() {
            return Err(SurfaceError::Blank);
        }
        match self.canvas.to_data_url() {
            Ok(url) => Ok(url),
            Err(e) => {
                // Tolerable platform failure: the sticker just has no mask
                log::warn!("[sketch] export failed: {e:?}");
                Ok(String::new())
            }
        }
    }

    /// Discard the current drawing and re-randomize the stroke color.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.drawing = false;
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.color = StrokeColor::random(rng);
        self.apply_color();
    }
}
