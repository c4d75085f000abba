use crate::errors::PageError;
use crate::page::Page;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
fn js_err(e: JsValue) -> PageError {
    PageError::Dom(format!("{:?}", e))
}

/// `Page` backed by the live browser document.
#[derive(Clone)]
pub struct WebPage {
    window: web::Window,
    document: web::Document,
}

impl WebPage {
    pub fn from_window() -> Result<Self, PageError> {
        let window = web::window().ok_or_else(|| PageError::Dom("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| PageError::Dom("no document".into()))?;
        Ok(Self { window, document })
    }

    #[inline]
    pub fn document(&self) -> &web::Document {
        &self.document
    }
}

impl Page for WebPage {
    type Element = web::Element;

    fn query(&self, selector: &str) -> Option<web::Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<web::Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web::Element>().ok())
            .collect()
    }

    fn create_element(&self, tag: &str) -> Result<web::Element, PageError> {
        self.document.create_element(tag).map_err(js_err)
    }

    fn append_child(&self, parent: &web::Element, child: &web::Element) -> Result<(), PageError> {
        parent.append_child(child).map(|_| ()).map_err(js_err)
    }

    fn is_attached(&self, el: &web::Element) -> bool {
        el.parent_node().is_some()
    }

    fn detach(&self, el: &web::Element) {
        if let Some(parent) = el.parent_node() {
            _ = parent.remove_child(el);
        }
    }

    fn add_class(&self, el: &web::Element, class: &str) {
        _ = el.class_list().add_1(class);
    }

    fn remove_class(&self, el: &web::Element, class: &str) {
        _ = el.class_list().remove_1(class);
    }

    fn has_class(&self, el: &web::Element, class: &str) -> bool {
        el.class_list().contains(class)
    }

    fn set_class_name(&self, el: &web::Element, class_name: &str) {
        el.set_class_name(class_name);
    }

    fn text(&self, el: &web::Element) -> String {
        el.text_content().unwrap_or_default()
    }

    fn set_text(&self, el: &web::Element, text: &str) {
        el.set_text_content(Some(text));
    }

    fn set_style(&self, el: &web::Element, property: &str, value: &str) -> Result<(), PageError> {
        // clouds and balloons are often inline <svg>
        let style = if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            html.style()
        } else if let Some(svg) = el.dyn_ref::<web::SvgElement>() {
            svg.style()
        } else {
            return Err(PageError::Dom(format!("<{}> has no inline style", el.tag_name())));
        };
        style.set_property(property, value).map_err(js_err)
    }

    fn viewport(&self) -> Vec2 {
        let w = self.window.inner_width().ok().and_then(|v| v.as_f64());
        let h = self.window.inner_height().ok().and_then(|v| v.as_f64());
        Vec2::new(w.unwrap_or(0.0) as f32, h.unwrap_or(0.0) as f32)
    }

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Result<(), PageError> {
        let callback = Closure::once_into_js(callback);
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref::<js_sys::Function>(),
                delay_ms as i32,
            )
            .map(|_| ())
            .map_err(js_err)
    }
}

/// Attach a click handler to the first element matching `selector`.
/// Returns false when nothing matches.
pub fn add_click_listener(
    page: &WebPage,
    selector: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    let Some(el) = page.query(selector) else {
        return false;
    };
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
    true
}

pub fn add_mousemove_listener(
    document: &web::Document,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}
