use crate::constants::{POPUP_HINT, POPUP_TITLE};

/// Personality traits shown in the info popup.
#[derive(Clone, Debug, PartialEq)]
pub struct Persona {
    pub mood: &'static str,
    pub empathy: u8,
    pub curiosity: u8,
    pub fun: u8,
    pub serious: u8,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            mood: "calm",
            empathy: 80,
            curiosity: 60,
            fun: 50,
            serious: 70,
        }
    }
}

impl Persona {
    pub fn panel_html(&self) -> String {
        format!(
            "<b>{}</b><br>Mood: {}<br>Empathy: {}<br>Curiosity: {}<br>Fun: {}<br>Serious: {}<br>{}",
            POPUP_TITLE, self.mood, self.empathy, self.curiosity, self.fun, self.serious, POPUP_HINT
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Popup {
    visible: bool,
}

impl Popup {
    /// Flip visibility and return the new state.
    #[inline]
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
