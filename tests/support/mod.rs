// In-memory document with a virtual clock for host-side tests.

use crate::errors::PageError;
use crate::page::Page;
use glam::Vec2;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

pub type NodeId = usize;

pub const ROOT: NodeId = 0;
pub const BUTTON_TEXT: &str = "Have a great day!";

#[derive(Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    text: String,
    style: BTreeMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

struct Timer {
    due_ms: u64,
    seq: u64,
    callback: Box<dyn FnOnce()>,
}

struct FakeDom {
    nodes: Vec<Node>,
    timers: Vec<Timer>,
    now_ms: u64,
    next_seq: u64,
    viewport: Vec2,
    fail_create: bool,
}

impl FakeDom {
    // Pre-order walk from the root, i.e. document order.
    fn document_order(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id].children.iter().rev());
        }
        out
    }

    fn unlink(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id].parent.take() {
            self.nodes[parent].children.retain(|c| *c != id);
        }
    }
}

#[derive(Clone)]
pub struct FakePage {
    dom: Rc<RefCell<FakeDom>>,
}

fn class_of(selector: &str) -> &str {
    selector
        .strip_prefix('.')
        .expect("fake page only understands class selectors")
}

impl FakePage {
    pub fn new(viewport: Vec2) -> Self {
        let root = Node {
            tag: "body".into(),
            ..Node::default()
        };
        Self {
            dom: Rc::new(RefCell::new(FakeDom {
                nodes: vec![root],
                timers: Vec::new(),
                now_ms: 0,
                next_seq: 0,
                viewport,
                fail_create: false,
            })),
        }
    }

    /// Container with the trigger button inside it.
    pub fn with_celebration_markup() -> (Self, NodeId, NodeId) {
        let page = Self::new(Vec2::new(1280.0, 720.0));
        let container = page.add_element(ROOT, "center-content");
        let button = page.add_element(container, "great-day-btn");
        page.set_text(&button, BUTTON_TEXT);
        (page, button, container)
    }

    pub fn add_element(&self, parent: NodeId, class: &str) -> NodeId {
        self.add_tagged(parent, "div", class)
    }

    pub fn add_tagged(&self, parent: NodeId, tag: &str, class: &str) -> NodeId {
        let el = self.create_element(tag).expect("create");
        self.set_class_name(&el, class);
        self.append_child(&parent, &el).expect("append");
        el
    }

    /// Make every later `create_element` fail.
    pub fn fail_create_elements(&self) {
        self.dom.borrow_mut().fail_create = true;
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.dom.borrow().nodes[id].children.clone()
    }

    pub fn children_with_class(&self, id: NodeId, class: &str) -> Vec<NodeId> {
        self.children(id)
            .into_iter()
            .filter(|c| self.has_class(c, class))
            .collect()
    }

    pub fn tag(&self, id: NodeId) -> String {
        self.dom.borrow().nodes[id].tag.clone()
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<String> {
        self.dom.borrow().nodes[id].style.get(property).cloned()
    }

    pub fn now_ms(&self) -> u64 {
        self.dom.borrow().now_ms
    }

    pub fn pending_timers(&self) -> usize {
        self.dom.borrow().timers.len()
    }

    /// Move the clock forward, firing due timers in order.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms() + ms;
        loop {
            let next = {
                let mut dom = self.dom.borrow_mut();
                let due = dom
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by_key(|(_, t)| (t.due_ms, t.seq))
                    .map(|(i, _)| i);
                due.map(|i| {
                    let timer = dom.timers.remove(i);
                    dom.now_ms = timer.due_ms;
                    timer.callback
                })
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.dom.borrow_mut().now_ms = target;
    }
}

impl Page for FakePage {
    type Element = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let class = class_of(selector);
        let dom = self.dom.borrow();
        dom.document_order()
            .into_iter()
            .filter(|id| dom.nodes[*id].classes.iter().any(|c| c == class))
            .collect()
    }

    fn create_element(&self, tag: &str) -> Result<NodeId, PageError> {
        let mut dom = self.dom.borrow_mut();
        if dom.fail_create {
            return Err(PageError::Dom(format!("cannot create <{}>", tag)));
        }
        dom.nodes.push(Node {
            tag: tag.to_string(),
            ..Node::default()
        });
        Ok(dom.nodes.len() - 1)
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<(), PageError> {
        let mut dom = self.dom.borrow_mut();
        dom.unlink(*child);
        dom.nodes[*child].parent = Some(*parent);
        dom.nodes[*parent].children.push(*child);
        Ok(())
    }

    fn is_attached(&self, el: &NodeId) -> bool {
        self.dom.borrow().nodes[*el].parent.is_some()
    }

    fn detach(&self, el: &NodeId) {
        self.dom.borrow_mut().unlink(*el);
    }

    fn add_class(&self, el: &NodeId, class: &str) {
        let mut dom = self.dom.borrow_mut();
        let classes = &mut dom.nodes[*el].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, el: &NodeId, class: &str) {
        self.dom.borrow_mut().nodes[*el].classes.retain(|c| c != class);
    }

    fn has_class(&self, el: &NodeId, class: &str) -> bool {
        self.dom.borrow().nodes[*el].classes.iter().any(|c| c == class)
    }

    fn set_class_name(&self, el: &NodeId, class_name: &str) {
        self.dom.borrow_mut().nodes[*el].classes =
            class_name.split_whitespace().map(str::to_string).collect();
    }

    fn text(&self, el: &NodeId) -> String {
        self.dom.borrow().nodes[*el].text.clone()
    }

    fn set_text(&self, el: &NodeId, text: &str) {
        self.dom.borrow_mut().nodes[*el].text = text.to_string();
    }

    fn set_style(&self, el: &NodeId, property: &str, value: &str) -> Result<(), PageError> {
        self.dom.borrow_mut().nodes[*el]
            .style
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn viewport(&self) -> Vec2 {
        self.dom.borrow().viewport
    }

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Result<(), PageError> {
        let mut dom = self.dom.borrow_mut();
        let seq = dom.next_seq;
        dom.next_seq += 1;
        let due_ms = dom.now_ms + delay_ms as u64;
        dom.timers.push(Timer {
            due_ms,
            seq,
            callback,
        });
        Ok(())
    }
}
