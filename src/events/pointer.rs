use crate::config::PageConfig;
use crate::dom::{self, WebPage};
use crate::page::Page;
use crate::parallax;
use glam::Vec2;
use web_sys as web;

#[inline]
fn pointer_uv(page: &WebPage, ev: &web::MouseEvent) -> Vec2 {
    let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    parallax::normalized_pointer(client, page.viewport())
}

/// Two independent listeners; registration order makes clouds move first.
pub fn wire_parallax_handlers(page: &WebPage, config: &PageConfig) {
    wire_cloud_parallax(page, config);
    wire_balloon_parallax(page, config);
    log::info!("[wire] parallax on mousemove");
}

fn wire_cloud_parallax(page: &WebPage, config: &PageConfig) {
    let page_for_move = page.clone();
    let selectors = config.selectors.clone();
    let params = config.parallax.clone();

    dom::add_mousemove_listener(page.document(), move |ev| {
        let uv = pointer_uv(&page_for_move, &ev);
        log::trace!("[parallax] clouds uv=({:.3},{:.3})", uv.x, uv.y);
        if let Err(e) = parallax::drive_clouds(&page_for_move, &selectors, &params, uv) {
            log::error!("[parallax] clouds: {}", e);
        }
    });
}

fn wire_balloon_parallax(page: &WebPage, config: &PageConfig) {
    let page_for_move = page.clone();
    let selectors = config.selectors.clone();
    let params = config.parallax.clone();

    dom::add_mousemove_listener(page.document(), move |ev| {
        let uv = pointer_uv(&page_for_move, &ev);
        if let Err(e) = parallax::drive_balloon(&page_for_move, &selectors, &params, uv) {
            log::error!("[parallax] balloon: {}", e);
        }
    });
}
