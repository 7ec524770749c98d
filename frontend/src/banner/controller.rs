use super::dom::{BannerDocument, BannerElement};
use super::BannerError;
use crate::config::BannerConfig;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerState {
    Open,
    Closed,
}

impl BannerState {
    pub fn is_open(self) -> bool {
        matches!(self, BannerState::Open)
    }
}

pub struct ErrorBannerController<E: BannerElement> {
    wrapper: E,
    close_button: E,
    close_icon: E,
    body: E,
    hidden_class: String,
    body_class: String,
    state: Cell<BannerState>,
}

impl<E: BannerElement> ErrorBannerController<E> {
    pub fn attach<D>(document: &D, config: &BannerConfig) -> Result<Self, BannerError>
    where
        D: BannerDocument<Element = E>,
    {
        let lookup = |id: &str| {
            document
                .element_by_id(id)
                .ok_or_else(|| BannerError::missing(id))
        };
        let wrapper = lookup(config.wrapper_id.as_str())?;
        let close_button = lookup(config.close_button_id.as_str())?;
        let close_icon = lookup(config.close_icon_id.as_str())?;
        let body = document.body().ok_or(BannerError::MissingBody)?;

        // The banner is rendered visible, so the background starts locked.
        body.add_class(&config.body_class)?;
        log::debug!("error banner attached to #{}", config.wrapper_id);

        Ok(Self {
            wrapper,
            close_button,
            close_icon,
            body,
            hidden_class: config.hidden_class.clone(),
            body_class: config.body_class.clone(),
            state: Cell::new(BannerState::Open),
        })
    }

    pub fn close(&self) -> Result<(), BannerError> {
        self.wrapper.add_class(&self.hidden_class)?;
        self.body.remove_class(&self.body_class)?;
        if self.state.replace(BannerState::Closed).is_open() {
            log::info!("error banner closed");
        } else {
            log::debug!("error banner already closed");
        }
        Ok(())
    }

    pub fn state(&self) -> BannerState {
        self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    fn close_from_event(&self, source: &str) {
        if let Err(err) = self.close() {
            log::error!("closing error banner from {source} failed: {err}");
        }
    }
}

impl<E: BannerElement + 'static> ErrorBannerController<E> {
    // Handlers own the controller for the rest of the page.
    pub fn install<D>(document: &D, config: &BannerConfig) -> Result<Rc<Self>, BannerError>
    where
        D: BannerDocument<Element = E>,
    {
        let controller = Rc::new(Self::attach(document, config)?);
        let controls = [
            ("close button", &controller.close_button),
            ("close icon", &controller.close_icon),
        ];
        for (source, control) in controls {
            let handle = Rc::clone(&controller);
            control.on_click(Box::new(move || handle.close_from_event(source)))?;
        }
        Ok(controller)
    }
}
