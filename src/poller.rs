use crate::constants::{STATUS_POLL_INTERVAL_MS, WEATHER_ENDPOINT};
use crate::core::{parse_report, status_text, HudState};
use crate::net;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Poll the status endpoint now and then on a fixed interval, forever.
pub fn start(state: Rc<RefCell<HudState>>, status_el: web::Element) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    poll_once(state.clone(), status_el.clone());
    let closure = Closure::wrap(Box::new(move || {
        poll_once(state.clone(), status_el.clone());
    }) as Box<dyn FnMut()>);
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            STATUS_POLL_INTERVAL_MS,
        )
        .map_err(|e| anyhow!("{:?}", e))?;
    closure.forget();
    Ok(())
}

fn poll_once(state: Rc<RefCell<HudState>>, status_el: web::Element) {
    let seq = state.borrow_mut().next_status_seq();
    spawn_local(async move {
        let outcome = match net::get_text(WEATHER_ENDPOINT).await {
            Ok(body) => parse_report(&body).map_err(anyhow::Error::from),
            Err(e) => Err(e),
        };
        if let Err(e) = &outcome {
            log::debug!("[poll] {} failed: {:?}", seq, e);
        }
        let mut state = state.borrow_mut();
        // a slow response must not overwrite a newer one
        if state.apply_status(seq, status_text(&outcome)) {
            status_el.set_inner_html(&state.status);
        }
    });
}
