//! Horizontal scrolling camera
//!
//! The camera has no state of its own: the offset is a pure function of the
//! hero position, recomputed every tick.

/// Left edge of the visible window in world coordinates
#[inline]
pub fn camera_offset(hero_x: f32, viewport_width: f32, world_width: f32) -> f32 {
    let max_offset = (world_width - viewport_width).max(0.0);
    (hero_x - viewport_width / 2.0).clamp(0.0, max_offset)
}

/// World x to screen x under the given offset
#[inline]
pub fn to_screen_x(world_x: f32, offset: f32) -> f32 {
    world_x - offset
}
