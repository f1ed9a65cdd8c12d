use crate::color::Color;
use crate::constants::*;
use crate::error::{Result, SceneError};

/// Runtime-tunable scene parameters (the debug panel edits these).
#[derive(Clone, Debug, PartialEq)]
pub struct SceneParams {
    pub material_color: Color,
    /// Vertical spacing between sections in world units.
    pub objects_distance: f32,
    pub particle_count: usize,
    pub particle_size: f32,
    /// Optional upper bound on per-frame delta time. `None` keeps deltas unclamped.
    pub max_frame_delta: Option<f32>,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            material_color: Color::from_hex(DEFAULT_MATERIAL_COLOR).unwrap_or(Color::WHITE),
            objects_distance: DEFAULT_OBJECTS_DISTANCE,
            particle_count: DEFAULT_PARTICLE_COUNT,
            particle_size: DEFAULT_PARTICLE_SIZE,
            max_frame_delta: None,
        }
    }
}

/// A single live edit coming from the debug panel.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamEdit {
    MaterialColor(Color),
    ObjectsDistance(f32),
    ParticleSize(f32),
}

impl SceneParams {
    /// Apply an edit, rejecting values outside the panel ranges.
    ///
    /// Returns `true` when the edit changes scene layout (objects and particles
    /// must be rebuilt), `false` for material-only edits.
    pub fn apply(&mut self, edit: &ParamEdit) -> Result<bool> {
        match *edit {
            ParamEdit::MaterialColor(c) => {
                self.material_color = c;
                Ok(false)
            }
            ParamEdit::ObjectsDistance(d) => {
                check_range("objects_distance", d, OBJECTS_DISTANCE_RANGE)?;
                self.objects_distance = d;
                Ok(true)
            }
            ParamEdit::ParticleSize(s) => {
                check_range("particle_size", s, PARTICLE_SIZE_RANGE)?;
                self.particle_size = s;
                Ok(false)
            }
        }
    }
}

fn check_range(name: &'static str, value: f32, (lo, hi): (f32, f32)) -> Result<()> {
    if value.is_finite() && (lo..=hi).contains(&value) {
        Ok(())
    } else {
        Err(SceneError::ParamOutOfRange { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page() {
        let p = SceneParams::default();
        assert_eq!(p.material_color.to_hex(), "#ffeded");
        assert_eq!(p.objects_distance, 4.0);
        assert_eq!(p.particle_count, 200);
        assert!(p.max_frame_delta.is_none());
    }

    #[test]
    fn distance_edit_requests_relayout() {
        let mut p = SceneParams::default();
        assert!(p.apply(&ParamEdit::ObjectsDistance(6.0)).unwrap());
        assert!(!p.apply(&ParamEdit::ParticleSize(0.05)).unwrap());
        assert!(p.apply(&ParamEdit::ObjectsDistance(f32::NAN)).is_err());
        assert!(p.apply(&ParamEdit::ParticleSize(5.0)).is_err());
        assert_eq!(p.objects_distance, 6.0);
        assert_eq!(p.particle_size, 0.05);
    }
}
