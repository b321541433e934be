use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up a host element by id and cast it to the expected element type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{} has unexpected type: {:?}", id, e))
}

/// Size the canvas backing store to the viewport once. Later window resizes
/// are not tracked, so the avatar stays where it was placed at startup.
pub fn size_canvas_to_window(window: &web::Window, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let w_px = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(canvas.width() as f64) as u32;
    let h_px = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(canvas.height() as f64) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    (canvas.width() as f32, canvas.height() as f32)
}

#[inline]
pub fn add_mouse_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!("{} listener error: {:?}", event, e);
    }
    closure.forget();
}
