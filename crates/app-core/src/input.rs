use glam::Vec2;

/// Pointer position in pixels to a cursor offset in roughly \[-0.5, 0.5\].
///
/// The center of the viewport is the origin; x grows right and y grows down,
/// like the pixel coordinates it comes from.
#[inline]
pub fn cursor_offset(px: f32, py: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(px / width - 0.5, py / height - 0.5)
}

/// Parallax target for the camera rig: screen-down is world-down.
#[inline]
pub fn parallax_target(cursor: Vec2) -> Vec2 {
    Vec2::new(cursor.x, -cursor.y)
}
