//! Validierungsmeldungen. Die Texte liefert ein externer Sprachkatalog.

/// Schlüssel einer Meldung, die dem Lernenden angezeigt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    /// Es wurde noch keine Linie gezogen
    PleaseDragLines,
}

impl MessageKey {
    /// String-Identifier für den Sprachkatalog.
    pub fn identifier(self) -> &'static str {
        match self {
            MessageKey::PleaseDragLines => "pleasedragalllines",
        }
    }
}

/// Externer Sprachkatalog.
pub trait MessageCatalog {
    fn get_string(&self, key: MessageKey) -> String;
}

/// Englische Standardtexte.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl MessageCatalog for DefaultMessages {
    fn get_string(&self, key: MessageKey) -> String {
        match key {
            MessageKey::PleaseDragLines => "Please drag all lines onto the image.".to_string(),
        }
    }
}
