use std::cell::{Cell, RefCell};
use std::rc::Rc;

use global_core::{
    HighlightTarget, Post, ReadOutcome, Reader, SpeechEngine, SpeechEvent, Utterance,
};

type Listener = Box<dyn FnMut(SpeechEvent)>;

#[derive(Default)]
struct ScriptedEngine {
    speaking: Cell<bool>,
    cancels: Cell<u32>,
    spoken: RefCell<Vec<Utterance>>,
    listener: RefCell<Option<Listener>>,
}

impl ScriptedEngine {
    fn fire(&self, event: SpeechEvent) {
        match event {
            SpeechEvent::Start => self.speaking.set(true),
            SpeechEvent::End | SpeechEvent::Error => self.speaking.set(false),
        }
        if let Some(listener) = self.listener.borrow_mut().as_mut() {
            listener(event);
        }
    }
}

impl SpeechEngine for ScriptedEngine {
    fn is_speaking(&self) -> bool {
        self.speaking.get()
    }

    fn cancel(&self) {
        self.cancels.set(self.cancels.get() + 1);
        self.speaking.set(false);
    }

    fn speak(&self, utterance: Utterance, listener: Listener) {
        self.spoken.borrow_mut().push(utterance);
        *self.listener.borrow_mut() = Some(listener);
    }
}

/// Log of highlight calls, shared between every card on the fake page.
#[derive(Clone, Default)]
struct Page {
    log: Rc<RefCell<Vec<String>>>,
}

impl Page {
    fn card(&self, name: &'static str) -> Card {
        Card {
            name,
            page: self.clone(),
        }
    }

    fn entries(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

struct Card {
    name: &'static str,
    page: Page,
}

impl HighlightTarget for Card {
    fn clear_all_highlights(&self) {
        self.page.log.borrow_mut().push("clear".to_string());
    }

    fn set_highlighted(&self, on: bool) {
        let verb = if on { "on" } else { "off" };
        self.page.log.borrow_mut().push(format!("{verb}:{}", self.name));
    }
}

fn sample_post() -> Post {
    serde_json::from_str(r#"{"titulo": "Gol", "contenido": "Minuto 90", "usuario": {"nombre": "Eva"}}"#)
        .expect("post json")
}

#[test]
fn inactive_reader_does_nothing() {
    let engine = ScriptedEngine::default();
    let page = Page::default();
    let reader = Reader::new();

    let outcome = reader.read_post(&engine, &sample_post(), page.card("a"), "es-MX");

    assert_eq!(outcome, ReadOutcome::Inactive);
    assert!(engine.spoken.borrow().is_empty());
    assert_eq!(engine.cancels.get(), 0);
    assert!(page.entries().is_empty());
}

#[test]
fn active_reader_speaks_and_highlights_for_the_utterance_lifetime() {
    let engine = ScriptedEngine::default();
    let page = Page::default();
    let reader = Reader::new();
    assert!(reader.toggle(&engine).active);

    let outcome = reader.read_post(&engine, &sample_post(), page.card("a"), "es-MX");
    assert_eq!(outcome, ReadOutcome::Started);
    assert_eq!(
        engine.spoken.borrow()[0],
        Utterance {
            text: "Publicación de Eva. Título: Gol. Contenido: Minuto 90.".to_string(),
            lang: "es-MX".to_string(),
        }
    );

    engine.fire(SpeechEvent::Start);
    engine.fire(SpeechEvent::End);
    assert_eq!(page.entries(), ["clear", "on:a", "off:a"]);
}

#[test]
fn second_read_while_speaking_only_stops() {
    let engine = ScriptedEngine::default();
    let page = Page::default();
    let reader = Reader::new();
    reader.toggle(&engine);

    reader.read_post(&engine, &sample_post(), page.card("a"), "es-MX");
    engine.fire(SpeechEvent::Start);
    let outcome = reader.read_post(&engine, &sample_post(), page.card("b"), "es-MX");

    assert_eq!(outcome, ReadOutcome::Stopped);
    assert_eq!(engine.spoken.borrow().len(), 1);
    assert_eq!(engine.cancels.get(), 1);
    assert_eq!(page.entries(), ["clear", "on:a"]);
}

#[test]
fn engine_error_clears_highlight() {
    let engine = ScriptedEngine::default();
    let page = Page::default();
    let reader = Reader::new();
    reader.toggle(&engine);

    reader.read_post(&engine, &sample_post(), page.card("a"), "es-MX");
    engine.fire(SpeechEvent::Start);
    engine.fire(SpeechEvent::Error);

    assert_eq!(page.entries(), ["clear", "on:a", "off:a"]);
    assert!(!engine.is_speaking());
}

#[test]
fn turning_reader_off_cancels_speech() {
    let engine = ScriptedEngine::default();
    let reader = Reader::new();

    let on = reader.toggle(&engine);
    assert_eq!(engine.cancels.get(), 0);
    let off = reader.toggle(&engine);

    assert!(on.active);
    assert!(!off.active);
    assert!(!reader.is_active());
    assert_eq!(engine.cancels.get(), 1);
    assert_eq!(off.label(), "Activar Lector");
}
