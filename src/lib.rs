#![cfg(target_arch = "wasm32")]
use crate::constants::{AUDIO_ID, CANVAS_ID, POPUP_ID, STATUS_ID};
use crate::core::HudState;
use anyhow::anyhow;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod net;
mod overlay;
mod poller;
mod render;
mod speech;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("liz-hud starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let audio_el: web::HtmlAudioElement = dom::element_by_id(&document, AUDIO_ID)?;
    let status_el: web::Element = dom::element_by_id(&document, STATUS_ID)?;
    let popup_el: web::HtmlElement = dom::element_by_id(&document, POPUP_ID)?;

    let (width, height) = dom::size_canvas_to_window(&window, &canvas);
    let surface = render::Surface::new(&canvas)?;

    let seed = js_sys::Date::now() as u64;
    let state = Rc::new(RefCell::new(HudState::new(width, height, seed)));
    {
        let s = state.borrow();
        log::info!(
            "[hud] surface={}x{} avatar=({:.0},{:.0}) r={:.0}",
            width,
            height,
            s.avatar.position.x,
            s.avatar.position.y,
            s.avatar.radius
        );
    }

    // Render loop driven by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state: state.clone(),
        surface,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    poller::start(state.clone(), status_el)?;

    events::wire_pointer_handlers(events::PointerWiring {
        canvas,
        popup: popup_el,
        speech: speech::SpeechWiring {
            state,
            playback: audio::Playback::new(audio_el),
        },
    });

    Ok(())
}
