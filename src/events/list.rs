// ParamFile - Liste d'evenements
// Sequence ordonnee, en ajout seul, remise a zero par `clear`
//
// # Code sentinelle
// `EventCode::UNDEFINED` (255) signifie "ne pas emettre" : `append`
// l'ignore silencieusement. Aucun autre controle n'est fait sur les
// codes, leur signification appartient a l'appelant.
//
// # Portabilite
// Ce module est en pur Rust, sans I/O.

use std::fmt;

use crate::constants::EVENT_UNDEFINED;

/// Code d'evenement choisi par l'appelant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventCode(u8);

impl EventCode {
    /// Sentinelle : aucun evenement n'est emis pour cette condition.
    pub const UNDEFINED: EventCode = EventCode(EVENT_UNDEFINED);

    /// Cree un code a partir de sa valeur brute.
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Valeur brute du code.
    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_undefined(self) -> bool {
        self.0 == EVENT_UNDEFINED
    }
}

impl From<u8> for EventCode {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Nature de la condition ayant produit un evenement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Parametre obligatoire absent du fichier
    MandatoryMissing,
    /// Parametre optionnel absent, valeur par defaut utilisee
    OptionalMissing,
    /// Parametre defini plusieurs fois
    Redefined,
    /// Valeur mal formee ou hors bornes, valeur par defaut conservee
    Malformed,
}

impl EventKind {
    /// Libelle court.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MandatoryMissing => "mandatory parameter not provisioned",
            Self::OptionalMissing => "optional parameter not provisioned",
            Self::Redefined => "parameter redefined",
            Self::Malformed => "parameter malformed or out of range",
        }
    }
}

/// Les quatre codes associes a un parametre lors de son enregistrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventCodes {
    pub mandatory_missing: EventCode,
    pub optional_missing: EventCode,
    pub redefined: EventCode,
    pub malformed: EventCode,
}

impl EventCodes {
    /// Codes dans l'ordre : obligatoire absent, optionnel absent,
    /// redefini, mal forme.
    pub const fn new(
        mandatory_missing: EventCode,
        optional_missing: EventCode,
        redefined: EventCode,
        malformed: EventCode,
    ) -> Self {
        Self { mandatory_missing, optional_missing, redefined, malformed }
    }

    /// Aucun evenement pour ce parametre.
    pub const fn none() -> Self {
        Self::new(
            EventCode::UNDEFINED,
            EventCode::UNDEFINED,
            EventCode::UNDEFINED,
            EventCode::UNDEFINED,
        )
    }

    /// Code associe a une nature d'evenement.
    pub fn code(&self, kind: EventKind) -> EventCode {
        match kind {
            EventKind::MandatoryMissing => self.mandatory_missing,
            EventKind::OptionalMissing => self.optional_missing,
            EventKind::Redefined => self.redefined,
            EventKind::Malformed => self.malformed,
        }
    }
}

impl Default for EventCodes {
    fn default() -> Self {
        Self::none()
    }
}

/// Un evenement de diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Code fourni a l'enregistrement du parametre
    pub code: EventCode,
    /// Ligne du fichier (base 1), 0 pour un parametre absent
    pub line: u16,
    /// Nature de la condition
    pub kind: EventKind,
    /// Nom du parametre concerne
    pub param: String,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "[{}] {}: {}", self.code, self.param, self.kind.as_str())
        } else {
            write!(f, "[{}] {}: {} at line {}", self.code, self.param, self.kind.as_str(), self.line)
        }
    }
}

/// Liste ordonnee des evenements d'un parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventList {
    events: Vec<Event>,
}

impl EventList {
    /// Cree une liste vide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute un evenement en queue. Sans effet si le code est UNDEFINED.
    /// Retourne true si l'evenement a ete ajoute.
    pub fn append(&mut self, code: EventCode, line: u16, kind: EventKind, param: &str) -> bool {
        if code.is_undefined() {
            return false;
        }
        self.events.push(Event { code, line, kind, param: param.to_string() });
        true
    }

    /// Vide la liste.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Parcours du plus ancien au plus recent.
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }
}

impl IntoIterator for EventList {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a EventList {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
