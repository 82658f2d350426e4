//! Tastatur-Abbildung: Pfeiltasten / WASD bewegen, Leertaste und Escape sind reserviert.

use glam::DVec2;

/// Eine gedrückte Taste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Escape,
    /// Druckbares Zeichen (z.B. `w`, `A`)
    Character(char),
    /// Jede andere Taste, mit ihrem Host-Namen
    Other(String),
}

impl Key {
    /// Übersetzt einen Tastennamen des Hosts (`KeyboardEvent.key`-Konvention).
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            " " | "Space" | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Character(c),
                    _ => Key::Other(name.to_string()),
                }
            }
        }
    }
}

/// Bedeutung einer Taste für die Linienbearbeitung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    /// Einheitsrichtung (y wächst nach unten)
    Move(DVec2),
    /// Leertaste: Aktivierung, keine Bewegung
    Activate,
    /// Escape: Abbruch, keine Bewegung
    Cancel,
    /// Nicht belegt
    Ignored,
}

/// Ordnet einer Taste ihre Aktion zu.
pub fn key_action(key: &Key) -> KeyAction {
    match key {
        Key::ArrowUp => KeyAction::Move(DVec2::NEG_Y),
        Key::ArrowDown => KeyAction::Move(DVec2::Y),
        Key::ArrowLeft => KeyAction::Move(DVec2::NEG_X),
        Key::ArrowRight => KeyAction::Move(DVec2::X),
        Key::Space => KeyAction::Activate,
        Key::Escape => KeyAction::Cancel,
        Key::Character(c) => match c.to_ascii_lowercase() {
            'w' => KeyAction::Move(DVec2::NEG_Y),
            's' => KeyAction::Move(DVec2::Y),
            'a' => KeyAction::Move(DVec2::NEG_X),
            'd' => KeyAction::Move(DVec2::X),
            ' ' => KeyAction::Activate,
            _ => KeyAction::Ignored,
        },
        Key::Other(_) => KeyAction::Ignored,
    }
}
