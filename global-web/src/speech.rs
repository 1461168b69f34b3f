//! Browser side of the post reader: `speechSynthesis` and post-card highlighting.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use global_core::speech::READING_CLASS;
use global_core::{
    HighlightTarget, Post, ReadOutcome, Reader, ReaderButton, SpeechEngine, SpeechEvent, Utterance,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, SpeechSynthesis, SpeechSynthesisUtterance};

use crate::config::site_config;
use crate::dom;

thread_local! {
    static READER: Reader = const { Reader::new() };
    static LIVE_LISTENERS: Cell<usize> = const { Cell::new(0) };
}

/// The page's speech engine. Every call is a no-op when the browser has none.
#[derive(Debug, Clone)]
pub struct WebSpeech {
    synth: Option<SpeechSynthesis>,
}

impl WebSpeech {
    #[must_use]
    pub fn from_window() -> Self {
        let synth = dom::window().and_then(|win| win.speech_synthesis().ok());
        if synth.is_none() {
            log::warn!("speechSynthesis unavailable; post reader is silent");
        }
        Self { synth }
    }

    fn utterance(utterance: &Utterance) -> Result<SpeechSynthesisUtterance, dom::DomError> {
        let js = SpeechSynthesisUtterance::new_with_text(&utterance.text)?;
        js.set_lang(&utterance.lang);
        Ok(js)
    }
}

impl SpeechEngine for WebSpeech {
    fn is_speaking(&self) -> bool {
        self.synth.as_ref().is_some_and(SpeechSynthesis::speaking)
    }

    fn cancel(&self) {
        if let Some(synth) = &self.synth {
            synth.cancel();
        }
    }

    fn speak(&self, utterance: Utterance, listener: Box<dyn FnMut(SpeechEvent)>) {
        let Some(synth) = &self.synth else {
            return;
        };
        let js = match Self::utterance(&utterance) {
            Ok(js) => js,
            Err(err) => {
                log::warn!("cannot build utterance: {err}");
                return;
            }
        };

        attach_listener(&js, listener);
        synth.speak(&js);
    }
}

/// Event handlers installed on one utterance.
///
/// Dropping this detaches them from the utterance and frees the closures.
struct UtteranceHandlers {
    utterance: SpeechSynthesisUtterance,
    _on_start: Closure<dyn FnMut(Event)>,
    _on_end: Closure<dyn FnMut(Event)>,
    _on_error: Closure<dyn FnMut(Event)>,
}

impl Drop for UtteranceHandlers {
    fn drop(&mut self) {
        self.utterance.set_onstart(None);
        self.utterance.set_onend(None);
        self.utterance.set_onerror(None);
        LIVE_LISTENERS.with(|live| live.set(live.get().saturating_sub(1)));
    }
}

type HandlerSlot = Rc<RefCell<Option<UtteranceHandlers>>>;

/// Forward `js`'s start, end and error events to `listener`.
///
/// The handlers stay alive until the utterance ends or fails, then release
/// themselves along with everything `listener` captured.
pub fn attach_listener(js: &SpeechSynthesisUtterance, listener: Box<dyn FnMut(SpeechEvent)>) {
    let listener = Rc::new(RefCell::new(listener));
    let slot: HandlerSlot = Rc::new(RefCell::new(None));
    let callback = |event: SpeechEvent| {
        let listener = Rc::clone(&listener);
        let slot = Rc::clone(&slot);
        Closure::wrap(Box::new(move |_e: Event| {
            {
                let mut notify = listener.borrow_mut();
                (*notify)(event);
            }
            if matches!(event, SpeechEvent::End | SpeechEvent::Error) {
                // wasm-bindgen defers freeing the running closure until it returns.
                let handlers = slot.borrow_mut().take();
                drop(handlers);
            }
        }) as Box<dyn FnMut(Event)>)
    };
    let on_start = callback(SpeechEvent::Start);
    let on_end = callback(SpeechEvent::End);
    let on_error = callback(SpeechEvent::Error);
    js.set_onstart(Some(on_start.as_ref().unchecked_ref()));
    js.set_onend(Some(on_end.as_ref().unchecked_ref()));
    js.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    LIVE_LISTENERS.with(|live| live.set(live.get() + 1));
    *slot.borrow_mut() = Some(UtteranceHandlers {
        utterance: js.clone(),
        _on_start: on_start,
        _on_end: on_end,
        _on_error: on_error,
    });
}

/// Utterances whose handlers are still waiting for an end or error event.
#[must_use]
pub fn live_listeners() -> usize {
    LIVE_LISTENERS.with(Cell::get)
}

/// Post card highlighted while it is read.
pub struct CardHighlight {
    document: Document,
    card: Element,
}

impl CardHighlight {
    #[must_use]
    pub const fn new(document: Document, card: Element) -> Self {
        Self { document, card }
    }
}

impl HighlightTarget for CardHighlight {
    fn clear_all_highlights(&self) {
        let selector = format!(".post-card.{READING_CLASS}");
        for el in dom::query_all(&self.document, &selector) {
            let _ = el.class_list().remove_1(READING_CLASS);
        }
    }

    fn set_highlighted(&self, on: bool) {
        let classes = self.card.class_list();
        let _ = if on {
            classes.add_1(READING_CLASS)
        } else {
            classes.remove_1(READING_CLASS)
        };
    }
}

/// Flip the page's reader flag, silencing `engine` when it turns off.
pub fn toggle_reader<E: SpeechEngine + ?Sized>(engine: &E) -> ReaderButton {
    READER.with(|reader| reader.toggle(engine))
}

#[must_use]
pub fn reader_active() -> bool {
    READER.with(Reader::is_active)
}

/// Read one post through `engine`, highlighting `card` while it plays.
pub fn read_post_with<E: SpeechEngine + ?Sized>(
    engine: &E,
    post: &Post,
    card: Element,
) -> ReadOutcome {
    let Some(document) = dom::document() else {
        return ReadOutcome::Inactive;
    };
    let locale = &site_config().speech_locale;
    let target = CardHighlight::new(document, card);
    READER.with(|reader| reader.read_post(engine, post, target, locale))
}

/// Decode a post object handed over by a page script. Unreadable fields fall
/// back to the spoken defaults.
#[must_use]
pub fn decode_post(value: JsValue) -> Post {
    serde_wasm_bindgen::from_value(value).unwrap_or_else(|err| {
        log::warn!("post object not understood, reading defaults: {err}");
        Post::default()
    })
}

/// Read a post aloud while the reader is on. A second call during playback
/// stops it.
#[wasm_bindgen(js_name = readPost)]
pub fn read_post(post: JsValue, element: Element) {
    let outcome = read_post_with(&WebSpeech::from_window(), &decode_post(post), element);
    log::debug!("readPost: {outcome:?}");
}
