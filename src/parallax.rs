use crate::config::{ParallaxParams, Selectors};
use crate::errors::PageError;
use crate::page::Page;
use glam::Vec2;

/// Pointer position as a fraction of the viewport.
///
/// A zero-sized viewport maps to the centre, which moves nothing.
#[inline]
pub fn normalized_pointer(client: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x > 0.0 && viewport.y > 0.0 {
        client / viewport
    } else {
        Vec2::splat(0.5)
    }
}

#[inline]
pub fn cloud_speed(index: usize, params: &ParallaxParams) -> f32 {
    (index as f32 + 1.0) * params.cloud_speed_step
}

/// Offset from the neutral pose for an element moving at `speed`.
#[inline]
pub fn displacement(pointer_uv: Vec2, speed: f32) -> Vec2 {
    (pointer_uv - Vec2::splat(0.5)) * speed
}

#[inline]
pub fn translate(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

/// Move every cloud; farther down the document means faster.
pub fn drive_clouds<P: Page>(
    page: &P,
    selectors: &Selectors,
    params: &ParallaxParams,
    pointer_uv: Vec2,
) -> Result<(), PageError> {
    for (i, cloud) in page.query_all(selectors.cloud).iter().enumerate() {
        let offset = displacement(pointer_uv, cloud_speed(i, params));
        page.set_style(cloud, "transform", &translate(offset))?;
    }
    Ok(())
}

pub fn drive_balloon<P: Page>(
    page: &P,
    selectors: &Selectors,
    params: &ParallaxParams,
    pointer_uv: Vec2,
) -> Result<(), PageError> {
    let balloon = page.require(selectors.balloon)?;
    let offset = displacement(pointer_uv, params.balloon_speed);
    page.set_style(&balloon, "transform", &translate(offset))
}
