use crate::errors::PageError;
use glam::Vec2;

/// The slice of the DOM the page effects touch.
///
/// The browser implementation lives in `dom.rs`; anything else that can
/// answer these calls (a fake document with a virtual clock, say) can drive
/// the same celebration and parallax code.
pub trait Page: Clone + 'static {
    type Element: Clone + 'static;

    /// First element matching `selector`, if any.
    fn query(&self, selector: &str) -> Option<Self::Element>;
    /// All elements matching `selector` in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    fn require(&self, selector: &str) -> Result<Self::Element, PageError> {
        self.query(selector)
            .ok_or_else(|| PageError::MissingElement(selector.to_string()))
    }

    /// New, detached element.
    fn create_element(&self, tag: &str) -> Result<Self::Element, PageError>;
    fn append_child(&self, parent: &Self::Element, child: &Self::Element)
        -> Result<(), PageError>;
    fn is_attached(&self, el: &Self::Element) -> bool;
    /// Remove `el` from its parent; no-op when already detached.
    fn detach(&self, el: &Self::Element);

    fn add_class(&self, el: &Self::Element, class: &str);
    fn remove_class(&self, el: &Self::Element, class: &str);
    fn has_class(&self, el: &Self::Element, class: &str) -> bool;
    fn set_class_name(&self, el: &Self::Element, class_name: &str);

    fn text(&self, el: &Self::Element) -> String;
    fn set_text(&self, el: &Self::Element, text: &str);

    fn set_style(&self, el: &Self::Element, property: &str, value: &str)
        -> Result<(), PageError>;

    /// Viewport size in CSS pixels.
    fn viewport(&self) -> Vec2;

    /// Run `callback` once after `delay_ms`. Not cancellable.
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Result<(), PageError>;
}
