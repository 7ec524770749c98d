use super::dom::{BannerDocument, BannerElement, ClickHandler};
use super::{BannerError, ErrorBannerController};
use crate::config::BannerConfig;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

fn dom_error(err: JsValue) -> BannerError {
    BannerError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

#[derive(Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn current() -> Result<Self, BannerError> {
        let window = web_sys::window().ok_or(BannerError::NoWindow)?;
        let document = window.document().ok_or(BannerError::NoDocument)?;
        Ok(Self { document })
    }
}

impl BannerDocument for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn body(&self) -> Option<WebElement> {
        self.document.body().map(|body| WebElement(body.into()))
    }
}

#[derive(Clone)]
pub struct WebElement(web_sys::Element);

impl BannerElement for WebElement {
    fn add_class(&self, class: &str) -> Result<(), BannerError> {
        self.0.class_list().add_1(class).map_err(dom_error)
    }

    fn remove_class(&self, class: &str) -> Result<(), BannerError> {
        self.0.class_list().remove_1(class).map_err(dom_error)
    }

    fn on_click(&self, handler: ClickHandler) -> Result<(), BannerError> {
        let closure =
            Closure::wrap(Box::new(move |_: web_sys::Event| handler()) as Box<dyn FnMut(_)>);
        self.0
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        closure.forget();
        Ok(())
    }
}

pub fn install(
    config: &BannerConfig,
) -> Result<Rc<ErrorBannerController<WebElement>>, BannerError> {
    let document = WebDocument::current()?;
    ErrorBannerController::install(&document, config)
}
