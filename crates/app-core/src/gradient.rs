use crate::error::{Result, SceneError};

/// One-row luminance ramp sampled by the toon shader with nearest filtering.
///
/// The shader looks up `n·l * 0.5 + 0.5`, so texel 0 is the fully unlit side
/// and the last texel the fully lit side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradientMap {
    texels: Vec<u8>,
}

impl GradientMap {
    /// Evenly spaced ramp with `steps` bands (at least two).
    pub fn stepped(steps: u32) -> Self {
        let steps = steps.max(2);
        let texels = (0..steps)
            .map(|i| ((i * 255) / (steps - 1)) as u8)
            .collect();
        Self { texels }
    }

    /// Decode an encoded image (JPEG/PNG) and keep its first row as luminance.
    pub fn from_image_bytes(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes)?.into_luma8();
        if img.width() == 0 || img.height() == 0 {
            return Err(SceneError::EmptyGradient);
        }
        let texels = (0..img.width()).map(|x| img.get_pixel(x, 0)[0]).collect();
        Ok(Self { texels })
    }

    pub fn width(&self) -> u32 {
        self.texels.len() as u32
    }

    pub fn texels(&self) -> &[u8] {
        &self.texels
    }

    /// Nearest-texel lookup for a light term in \[-1, 1\], as `toon.wgsl` does it.
    #[cfg(test)]
    fn sample(&self, n_dot_l: f32) -> u8 {
        let u = (n_dot_l.clamp(-1.0, 1.0) * 0.5 + 0.5) * self.texels.len() as f32;
        let i = (u as usize).min(self.texels.len() - 1);
        self.texels[i]
    }
}
