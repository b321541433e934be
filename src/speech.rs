use crate::audio::Playback;
use crate::constants::{GREETING_TEXT, TTS_ENDPOINT, WAVEFORM_LIFETIME_MS};
use crate::core::{HudState, SpeechRefusal, SpeechRequest, SpeechTicket};
use crate::net;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone)]
pub struct SpeechWiring {
    pub state: Rc<RefCell<HudState>>,
    pub playback: Playback,
}

/// Double-click on the canvas at `point`.
pub fn on_double_click(w: &SpeechWiring, point: Vec2) {
    let started = w.state.borrow_mut().begin_speech(point);
    let ticket = match started {
        Ok(t) => t,
        Err(SpeechRefusal::Miss) => return,
        Err(SpeechRefusal::Busy) => {
            log::debug!("[speech] gesture ignored, still talking");
            return;
        }
    };
    log::info!("[speech] gesture {} started", ticket.generation());
    schedule_waveform_expiry(&w.state, ticket);

    let w = w.clone();
    spawn_local(async move {
        if let Err(e) = speak(&w, ticket).await {
            log::warn!("[speech] gesture {} failed: {:?}", ticket.generation(), e);
            w.state.borrow_mut().end_speech(ticket);
        }
    });
}

async fn speak(w: &SpeechWiring, ticket: SpeechTicket) -> anyhow::Result<()> {
    let body = serde_json::to_string(&SpeechRequest {
        text: GREETING_TEXT,
    })?;
    let blob = net::post_json_for_blob(TTS_ENDPOINT, &body).await?;
    let state = w.state.clone();
    w.playback
        .play_blob(&blob, move || {
            if state.borrow_mut().end_speech(ticket) {
                log::info!("[speech] gesture {} finished", ticket.generation());
            }
        })
        .await
}

/// The waveform lasts a fixed time, independent of how long the audio plays.
fn schedule_waveform_expiry(state: &Rc<RefCell<HudState>>, ticket: SpeechTicket) {
    let Some(window) = web::window() else {
        return;
    };
    let state = state.clone();
    let expire = Closure::once_into_js(move || {
        state.borrow_mut().expire_waveform(ticket);
    });
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        expire.unchecked_ref(),
        WAVEFORM_LIFETIME_MS,
    ) {
        log::error!("[speech] waveform timer error: {:?}", e);
    }
}
