use crate::config::{CelebrationParams, PageConfig, Selectors, SparkleParams};
use crate::errors::PageError;
use crate::page::Page;
use crate::sparkle;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct CelebrationState {
    // Button text from before the first trigger of an overlapping run.
    original_text: Option<String>,
    generation: u64,
}

/// Click-driven celebration: state class, text swap and a sparkle burst.
///
/// Overlapping triggers share one saved original text, and only the reset
/// scheduled by the most recent trigger restores the button. Without this a
/// second click inside the reset window would save the celebratory text as
/// the "original" and leave it on the button for good.
#[derive(Clone, Debug)]
pub struct Celebration {
    selectors: Selectors,
    params: CelebrationParams,
    sparkles: SparkleParams,
    state: Rc<RefCell<CelebrationState>>,
}

impl Celebration {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            selectors: config.selectors.clone(),
            params: config.celebration.clone(),
            sparkles: config.sparkles.clone(),
            state: Rc::new(RefCell::new(CelebrationState::default())),
        }
    }

    /// True while a reset is still pending.
    pub fn is_active(&self) -> bool {
        self.state.borrow().original_text.is_some()
    }

    pub fn trigger<P, R>(&self, page: &P, rng: &mut R) -> Result<(), PageError>
    where
        P: Page,
        R: Rng + ?Sized,
    {
        let button = page.require(self.selectors.button)?;
        let container = page.require(self.selectors.container)?;

        page.add_class(&button, self.params.class_name);

        let generation = {
            let mut st = self.state.borrow_mut();
            if st.original_text.is_none() {
                st.original_text = Some(page.text(&button));
            }
            st.generation += 1;
            st.generation
        };

        // Reset is scheduled before the burst so a failed spawn still clears the button.
        let state = self.state.clone();
        let page_for_reset = page.clone();
        let button_for_reset = button.clone();
        let class_name = self.params.class_name;
        page.set_timeout(
            self.params.reset_ms,
            Box::new(move || {
                let original = {
                    let mut st = state.borrow_mut();
                    if st.generation != generation {
                        return;
                    }
                    st.original_text.take()
                };
                page_for_reset.remove_class(&button_for_reset, class_name);
                if let Some(text) = original {
                    page_for_reset.set_text(&button_for_reset, &text);
                }
            }),
        )?;

        sparkle::spawn_sparkles(page, &container, &self.sparkles, rng)?;
        page.set_text(&button, self.params.text);
        log::info!("[celebrate] generation {}", generation);
        Ok(())
    }
}
