use crate::banner::dom::{BannerDocument, BannerElement, ClickHandler};
use crate::banner::BannerError;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

#[derive(Default)]
struct ElementInner {
    classes: RefCell<BTreeSet<String>>,
    handlers: RefCell<Vec<Rc<dyn Fn()>>>,
    reject_class_changes: Cell<bool>,
}

#[derive(Clone, Default)]
pub struct MockElement {
    inner: Rc<ElementInner>,
}

impl MockElement {
    pub fn click(&self) {
        let handlers = self.inner.handlers.borrow().clone();
        for handler in handlers {
            handler();
        }
    }

    pub fn classes(&self) -> Vec<String> {
        self.inner.classes.borrow().iter().cloned().collect()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.inner.classes.borrow().contains(class)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.handlers.borrow().len()
    }

    pub fn reject_class_changes(&self) {
        self.inner.reject_class_changes.set(true);
    }

    fn check_writable(&self) -> Result<(), BannerError> {
        if self.inner.reject_class_changes.get() {
            return Err(BannerError::Dom("classList is read-only".into()));
        }
        Ok(())
    }
}

impl BannerElement for MockElement {
    fn add_class(&self, class: &str) -> Result<(), BannerError> {
        self.check_writable()?;
        self.inner.classes.borrow_mut().insert(class.to_string());
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), BannerError> {
        self.check_writable()?;
        self.inner.classes.borrow_mut().remove(class);
        Ok(())
    }

    fn on_click(&self, handler: ClickHandler) -> Result<(), BannerError> {
        self.inner.handlers.borrow_mut().push(Rc::from(handler));
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockDocument {
    elements: HashMap<String, MockElement>,
    body: Option<MockElement>,
}

impl MockDocument {
    pub fn with_ids(ids: &[&str]) -> Self {
        Self {
            elements: ids
                .iter()
                .map(|id| (id.to_string(), MockElement::default()))
                .collect(),
            body: Some(MockElement::default()),
        }
    }

    pub fn banner_page() -> Self {
        Self::with_ids(&["error-wrapper", "error-close-btn", "error-close"])
    }

    pub fn without(mut self, id: &str) -> Self {
        self.elements.remove(id);
        self
    }

    pub fn without_body(mut self) -> Self {
        self.body = None;
        self
    }

    pub fn element(&self, id: &str) -> MockElement {
        self.elements
            .get(id)
            .cloned()
            .unwrap_or_else(|| panic!("mock document has no #{id}"))
    }

    pub fn body_element(&self) -> MockElement {
        self.body.clone().expect("mock document has no body")
    }
}

impl BannerDocument for MockDocument {
    type Element = MockElement;

    fn element_by_id(&self, id: &str) -> Option<MockElement> {
        self.elements.get(id).cloned()
    }

    fn body(&self) -> Option<MockElement> {
        self.body.clone()
    }
}
