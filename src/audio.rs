use crate::core::Completion;
use crate::net::js_err;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// The page's `<audio>` element plus the object URL it currently plays.
#[derive(Clone)]
pub struct Playback {
    element: web::HtmlAudioElement,
    current_url: Rc<RefCell<Option<String>>>,
    finish: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Playback {
    pub fn new(element: web::HtmlAudioElement) -> Self {
        Self {
            element,
            current_url: Rc::new(RefCell::new(None)),
            finish: Rc::new(RefCell::new(None)),
        }
    }

    /// Load `blob` as the audio source, arm `on_finished`, and start playing.
    ///
    /// `on_finished` runs once, on `ended`, `error` or `abort`, whichever
    /// comes after playback started. A rejected `play()` (unsupported format,
    /// autoplay policy) is returned as an error and `on_finished` never runs.
    pub async fn play_blob(
        &self,
        blob: &web::Blob,
        on_finished: impl FnOnce() + 'static,
    ) -> anyhow::Result<()> {
        let url = web::Url::create_object_url_with_blob(blob).map_err(js_err)?;
        if let Some(prev) = self.current_url.borrow_mut().replace(url.clone()) {
            _ = web::Url::revoke_object_url(&prev);
        }

        self.element.set_src(&url);
        let started = self.element.play().map_err(js_err)?;
        JsFuture::from(started).await.map_err(js_err)?;

        // Armed only after play() resolved: swapping the source queues an
        // `abort` for the previous resource, which must not end this gesture.
        let completion = Rc::new(RefCell::new(Completion::new(on_finished)));
        let finish = Closure::wrap(Box::new(move || {
            completion.borrow_mut().fire();
        }) as Box<dyn FnMut()>);
        {
            let f = finish.as_ref().unchecked_ref();
            self.element.set_onended(Some(f));
            self.element.set_onerror(Some(f));
            self.element.set_onabort(Some(f));
        }
        // dropping the previous gesture's closure is safe once it is unhooked
        *self.finish.borrow_mut() = Some(finish);
        Ok(())
    }
}
