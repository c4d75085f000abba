use crate::config::SparkleParams;
use crate::errors::PageError;
use crate::page::Page;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Offset of sparkle `index` out of `count` from the container origin.
///
/// Sparkles are spread evenly around a circle; `jitter01` in \[0, 1) pushes
/// each one outwards by up to `radius_jitter_px` so bursts never line up.
#[inline]
pub fn sparkle_offset(index: usize, count: usize, jitter01: f32, params: &SparkleParams) -> Vec2 {
    let angle = index as f32 / count.max(1) as f32 * TAU;
    let radius = params.min_radius_px + jitter01 * params.radius_jitter_px;
    Vec2::from_angle(angle) * radius
}

#[inline]
pub fn px(value: f32) -> String {
    format!("{}px", value)
}

/// Append a burst of sparkles to `container` and schedule each one's removal.
pub fn spawn_sparkles<P, R>(
    page: &P,
    container: &P::Element,
    params: &SparkleParams,
    rng: &mut R,
) -> Result<(), PageError>
where
    P: Page,
    R: Rng + ?Sized,
{
    for i in 0..params.count {
        let offset = sparkle_offset(i, params.count, rng.gen::<f32>(), params);

        let sparkle = page.create_element(params.tag)?;
        page.set_class_name(&sparkle, params.class_name);
        page.set_style(&sparkle, "left", &px(offset.x))?;
        page.set_style(&sparkle, "top", &px(offset.y))?;
        page.append_child(container, &sparkle)?;

        let page_for_timeout = page.clone();
        page.set_timeout(
            params.lifetime_ms,
            Box::new(move || {
                // the container may have been cleared in the meantime
                if page_for_timeout.is_attached(&sparkle) {
                    page_for_timeout.detach(&sparkle);
                }
            }),
        )?;
    }
    log::debug!("[sparkle] spawned {}", params.count);
    Ok(())
}
