use crate::constants::{
    AVATAR_FILL, AVATAR_GLOW, AVATAR_GLOW_BLUR, PARTICLE_RGB, WAVEFORM_GLOW_BLUR,
    WAVEFORM_LINE_WIDTH, WAVEFORM_STROKE,
};
use crate::core::{Avatar, HudState, ParticleField, WaveformTrack};
use anyhow::anyhow;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D canvas the HUD is painted on. Dimensions are captured once at startup.
pub struct Surface {
    ctx: web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Surface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Paint one frame, back to front: waveform, avatar, particles.
    pub fn draw(&self, state: &HudState) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        self.draw_waveform(&state.waveform);
        self.draw_avatar(&state.avatar);
        self.draw_particles(&state.particles);
    }

    fn draw_waveform(&self, track: &WaveformTrack) {
        if track.is_empty() {
            return;
        }
        let midline = self.height / 2.0;
        let ctx = &self.ctx;
        ctx.save();
        ctx.begin_path();
        ctx.move_to(0.0, midline);
        for (x, y) in track.vertices(midline) {
            ctx.line_to(x, y);
        }
        ctx.set_stroke_style_str(WAVEFORM_STROKE);
        ctx.set_line_width(WAVEFORM_LINE_WIDTH);
        ctx.set_shadow_blur(WAVEFORM_GLOW_BLUR);
        ctx.set_shadow_color(WAVEFORM_STROKE);
        ctx.stroke();
        ctx.restore();
    }

    fn draw_avatar(&self, avatar: &Avatar) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.begin_path();
        _ = ctx.arc(
            avatar.position.x as f64,
            avatar.position.y as f64,
            avatar.draw_radius().max(0.0) as f64,
            0.0,
            TAU,
        );
        ctx.set_fill_style_str(AVATAR_FILL);
        ctx.set_shadow_color(AVATAR_GLOW);
        ctx.set_shadow_blur(AVATAR_GLOW_BLUR);
        ctx.fill();
        ctx.restore();
    }

    fn draw_particles(&self, field: &ParticleField) {
        let ctx = &self.ctx;
        if field.is_empty() {
            return;
        }
        let (r, g, b) = PARTICLE_RGB;
        for p in field.iter() {
            ctx.begin_path();
            _ = ctx.arc(
                p.position.x as f64,
                p.position.y as f64,
                p.radius as f64,
                0.0,
                TAU,
            );
            ctx.set_fill_style_str(&format!("rgba({},{},{},{})", r, g, b, p.alpha));
            ctx.fill();
        }
    }
}
