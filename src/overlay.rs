use crate::core::{Persona, Popup};
use web_sys as web;

#[inline]
pub fn show(popup: &web::HtmlElement, persona: &Persona) {
    popup.set_inner_html(&persona.panel_html());
    _ = popup.style().set_property("display", "block");
}

#[inline]
pub fn hide(popup: &web::HtmlElement) {
    _ = popup.style().set_property("display", "none");
}

/// Bring the popup element in line with the popup state.
#[inline]
pub fn sync(popup: &web::HtmlElement, state: &Popup, persona: &Persona) {
    if state.is_visible() {
        show(popup, persona);
    } else {
        hide(popup);
    }
}
