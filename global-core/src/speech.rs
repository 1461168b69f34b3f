//! Post reader: turns a post into one spoken utterance and highlights it while
//! it plays.
//!
//! The reader is gated by a single in-memory flag flipped from the
//! accessibility panel. A read request while the engine is already speaking
//! stops the current utterance instead of starting another; there is no queue.

use std::cell::Cell;

use serde::Deserialize;

use crate::SpeechEngine;

/// Class applied to the post card being read.
pub const READING_CLASS: &str = "is-reading";

/// Author block of a post as the page scripts hand it over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub nombre: Option<String>,
}

/// Post fields the reader cares about. Field names match the site's JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub contenido: Option<String>,
    #[serde(default)]
    pub usuario: Option<Author>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    pub lang: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechEvent {
    Start,
    End,
    Error,
}

/// Element that shows which post is being read.
pub trait HighlightTarget {
    /// Drop the highlight from every post on the page.
    fn clear_all_highlights(&self);

    fn set_highlighted(&self, on: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// Reader is off; nothing happened.
    Inactive,
    /// An utterance was playing and got cancelled.
    Stopped,
    Started,
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Spoken text for `post`, with fixed fallbacks for missing fields.
#[must_use]
pub fn utterance_text(post: &Post) -> String {
    let titulo = present(post.titulo.as_ref()).map_or("Sin título", str::trim);
    let contenido = present(post.contenido.as_ref()).map_or("Sin contenido", str::trim);
    let autor = post
        .usuario
        .as_ref()
        .and_then(|u| present(u.nombre.as_ref()))
        .unwrap_or("un usuario");
    format!("Publicación de {autor}. Título: {titulo}. Contenido: {contenido}.")
}

/// Presentation of the reader toggle button for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderButton {
    pub active: bool,
}

impl ReaderButton {
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        if self.active { "fas fa-stop" } else { "fas fa-play" }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        if self.active {
            "Desactivar Lector"
        } else {
            "Activar Lector"
        }
    }

    #[must_use]
    pub const fn helper_text(self) -> &'static str {
        if self.active {
            "Haz clic en un post para leerlo. Clic de nuevo para parar."
        } else {
            "Una vez activo, haz clic en cualquier publicación para escucharla."
        }
    }

    /// Inner markup for the button: icon followed by the label.
    #[must_use]
    pub fn inner_html(self) -> String {
        format!("<i class=\"{}\"></i> {}", self.icon_class(), self.label())
    }
}

/// Holder of the reader on/off flag. Starts off on every page load.
#[derive(Debug, Default)]
pub struct Reader {
    active: Cell<bool>,
}

impl Reader {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: Cell::new(false),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Flip the flag. Turning the reader off silences the engine.
    pub fn toggle<E: SpeechEngine + ?Sized>(&self, engine: &E) -> ReaderButton {
        let active = !self.active.get();
        self.active.set(active);
        if !active {
            engine.cancel();
        }
        log::debug!("post reader {}", if active { "enabled" } else { "disabled" });
        ReaderButton { active }
    }

    /// Read `post` aloud and highlight `target` while it plays.
    pub fn read_post<E, H>(&self, engine: &E, post: &Post, target: H, locale: &str) -> ReadOutcome
    where
        E: SpeechEngine + ?Sized,
        H: HighlightTarget + 'static,
    {
        if !self.active.get() {
            return ReadOutcome::Inactive;
        }
        if engine.is_speaking() {
            engine.cancel();
            return ReadOutcome::Stopped;
        }

        let utterance = Utterance {
            text: utterance_text(post),
            lang: locale.to_string(),
        };
        engine.speak(
            utterance,
            Box::new(move |event| match event {
                SpeechEvent::Start => {
                    target.clear_all_highlights();
                    target.set_highlighted(true);
                }
                SpeechEvent::End | SpeechEvent::Error => target.set_highlighted(false),
            }),
        );
        ReadOutcome::Started
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(titulo: Option<&str>, contenido: Option<&str>, autor: Option<&str>) -> Post {
        Post {
            titulo: titulo.map(str::to_string),
            contenido: contenido.map(str::to_string),
            usuario: autor.map(|n| Author {
                nombre: Some(n.to_string()),
            }),
        }
    }

    #[test]
    fn text_uses_all_fields() {
        let text = utterance_text(&post(Some(" Final "), Some("Ganamos 2-1 "), Some("Ana")));
        assert_eq!(
            text,
            "Publicación de Ana. Título: Final. Contenido: Ganamos 2-1."
        );
    }

    #[test]
    fn text_falls_back_for_missing_fields() {
        assert_eq!(
            utterance_text(&Post::default()),
            "Publicación de un usuario. Título: Sin título. Contenido: Sin contenido."
        );
        assert_eq!(
            utterance_text(&post(Some(""), Some(""), Some(""))),
            "Publicación de un usuario. Título: Sin título. Contenido: Sin contenido."
        );
    }

    #[test]
    fn post_parses_from_site_json() {
        let parsed: Post = serde_json::from_str(
            r#"{"id": 7, "titulo": "Hola", "usuario": {"nombre": "Luis", "id": 2}}"#,
        )
        .expect("post json");
        assert_eq!(parsed, post(Some("Hola"), None, Some("Luis")));
    }

    #[test]
    fn button_markup_matches_state() {
        let on = ReaderButton { active: true };
        let off = ReaderButton { active: false };
        assert_eq!(on.inner_html(), "<i class=\"fas fa-stop\"></i> Desactivar Lector");
        assert_eq!(off.inner_html(), "<i class=\"fas fa-play\"></i> Activar Lector");
        assert!(off.helper_text().starts_with("Una vez activo"));
    }
}
