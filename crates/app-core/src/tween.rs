use glam::Vec3;

/// GSAP-style `power2.inOut`: quadratic ease in, quadratic ease out.
#[inline]
pub fn ease_power2_in_out(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    if p < 0.5 {
        2.0 * p * p
    } else {
        let k = -2.0 * p + 2.0;
        1.0 - k * k * 0.5
    }
}

/// A bounded rotation offset applied on top of whatever else moves the object.
///
/// The tween is additive: each `advance` returns only the rotation gained since
/// the previous call, so the continuous spin keeps running underneath and
/// overlapping kicks on the same object stack.
#[derive(Clone, Debug)]
pub struct RotationTween {
    pub target: usize,
    offset: Vec3,
    duration: f32,
    elapsed: f32,
}

impl RotationTween {
    pub fn new(target: usize, offset: Vec3, duration: f32) -> Self {
        Self {
            target,
            offset,
            duration: duration.max(f32::EPSILON),
            elapsed: 0.0,
        }
    }

    pub fn progress(&self) -> f32 {
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Step by `dt` seconds and return the rotation delta to add this step.
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        let before = ease_power2_in_out(self.progress());
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        let after = ease_power2_in_out(self.progress());
        self.offset * (after - before)
    }
}
