use crate::celebrate::Celebration;
use crate::config::PageConfig;
use crate::dom::{self, WebPage};

pub fn wire_celebrate_click(page: &WebPage, config: &PageConfig) {
    let celebration = Celebration::new(config);
    let page_for_click = page.clone();

    let wired = dom::add_click_listener(page, config.selectors.button, move || {
        if celebration.is_active() {
            log::debug!("[celebrate] re-triggered before reset");
        }
        if let Err(e) = celebration.trigger(&page_for_click, &mut rand::thread_rng()) {
            log::error!("[celebrate] {}", e);
        }
    });
    if wired {
        log::info!("[wire] click on {}", config.selectors.button);
    } else {
        log::warn!("[wire] no {} on the page; celebration disabled", config.selectors.button);
    }
}
