use crate::dom;
use crate::input;
use crate::overlay;
use crate::speech::{self, SpeechWiring};
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub popup: web::HtmlElement,
    pub speech: SpeechWiring,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_click(&w);
    wire_dblclick(&w);
}

fn wire_click(w: &PointerWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::add_mouse_listener(&target, "click", move |ev: web::MouseEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let mut state = w.speech.state.borrow_mut();
        if state.click(pos).is_some() {
            overlay::sync(&w.popup, &state.popup, &state.persona);
            let shown = state.popup.is_visible();
            log::info!("[click] popup {}", if shown { "shown" } else { "hidden" });
        }
    });
}

fn wire_dblclick(w: &PointerWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::add_mouse_listener(&target, "dblclick", move |ev: web::MouseEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        speech::on_double_click(&w.speech, pos);
    });
}
