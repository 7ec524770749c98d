use super::BannerError;

pub type ClickHandler = Box<dyn Fn()>;

pub trait BannerElement: Clone {
    fn add_class(&self, class: &str) -> Result<(), BannerError>;

    fn remove_class(&self, class: &str) -> Result<(), BannerError>;

    fn on_click(&self, handler: ClickHandler) -> Result<(), BannerError>;
}

pub trait BannerDocument {
    type Element: BannerElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn body(&self) -> Option<Self::Element>;
}
