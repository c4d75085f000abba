use crate::constants::*;

/// CSS selectors for the elements the page logic reads and mutates.
#[derive(Clone, Debug)]
pub struct Selectors {
    pub button: &'static str,
    pub container: &'static str,
    pub cloud: &'static str,
    pub balloon: &'static str,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            button: BUTTON_SELECTOR,
            container: CONTAINER_SELECTOR,
            cloud: CLOUD_SELECTOR,
            balloon: BALLOON_SELECTOR,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SparkleParams {
    pub count: usize,
    pub tag: &'static str,
    pub class_name: &'static str,
    pub min_radius_px: f32,
    pub radius_jitter_px: f32,
    pub lifetime_ms: u32,
}

impl Default for SparkleParams {
    fn default() -> Self {
        Self {
            count: SPARKLE_COUNT,
            tag: SPARKLE_TAG,
            class_name: SPARKLE_CLASS,
            min_radius_px: SPARKLE_MIN_RADIUS_PX,
            radius_jitter_px: SPARKLE_RADIUS_JITTER_PX,
            lifetime_ms: SPARKLE_LIFETIME_MS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CelebrationParams {
    pub class_name: &'static str,
    pub text: &'static str,
    pub reset_ms: u32,
}

impl Default for CelebrationParams {
    fn default() -> Self {
        Self {
            class_name: CELEBRATING_CLASS,
            text: CELEBRATION_TEXT,
            reset_ms: CELEBRATION_RESET_MS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParallaxParams {
    pub cloud_speed_step: f32,
    pub balloon_speed: f32,
}

impl Default for ParallaxParams {
    fn default() -> Self {
        Self {
            cloud_speed_step: CLOUD_SPEED_STEP,
            balloon_speed: BALLOON_SPEED,
        }
    }
}

/// Everything the page wiring needs; `Default` matches the shipped markup.
#[derive(Clone, Debug, Default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub sparkles: SparkleParams,
    pub celebration: CelebrationParams,
    pub parallax: ParallaxParams,
}
