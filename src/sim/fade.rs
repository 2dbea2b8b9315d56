//! Result indicator fade-in

use glam::FloatExt;

use crate::consts::RESULT_FADE_SECS;

/// One animation frame of the result indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeFrame {
    pub opacity: f32,
    /// Uniform scale (0 = collapsed, 1 = full size)
    pub scale: f32,
}

impl FadeFrame {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        scale: 0.0,
    };
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        scale: 1.0,
    };
}

/// Linear opacity and scale ramp from 0 to 1
#[derive(Debug, Clone)]
pub struct ResultFade {
    elapsed: f32,
    duration: f32,
}

impl Default for ResultFade {
    fn default() -> Self {
        Self::new(RESULT_FADE_SECS)
    }
}

impl ResultFade {
    pub fn new(duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Step the animation by one frame
    pub fn advance(&mut self, dt: f32) -> FadeFrame {
        self.elapsed += dt;
        if self.is_finished() {
            return FadeFrame::SHOWN;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        FadeFrame {
            opacity: 0.0_f32.lerp(1.0, t),
            scale: 0.0_f32.lerp(1.0, t),
        }
    }
}
