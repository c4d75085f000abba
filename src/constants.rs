/// Page wiring and tuning constants.
///
/// These name the markup and stylesheet the page ships with and keep the
/// magic numbers of the celebration and parallax effects in one place.
// Selectors the page markup provides
pub const BUTTON_SELECTOR: &str = ".great-day-btn";
pub const CONTAINER_SELECTOR: &str = ".center-content";
pub const CLOUD_SELECTOR: &str = ".cloud";
pub const BALLOON_SELECTOR: &str = ".hot-air-balloon";

// Classes defined by the stylesheet
pub const CELEBRATING_CLASS: &str = "celebrating";
pub const SPARKLE_CLASS: &str = "sparkle";
pub const SPARKLE_TAG: &str = "div";

// Celebration
pub const CELEBRATION_TEXT: &str = "✨ Amazing! ✨";
pub const CELEBRATION_RESET_MS: u32 = 600;

// Sparkles
pub const SPARKLE_COUNT: usize = 12;
pub const SPARKLE_MIN_RADIUS_PX: f32 = 80.0;
pub const SPARKLE_RADIUS_JITTER_PX: f32 = 40.0; // added on top of the min radius, scaled by [0, 1)
pub const SPARKLE_LIFETIME_MS: u32 = 1000;

// Parallax
pub const CLOUD_SPEED_STEP: f32 = 0.5; // cloud i moves at (i + 1) * step
pub const BALLOON_SPEED: f32 = 10.0;
