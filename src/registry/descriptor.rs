// ParamFile - Descripteur de parametre
//
// Un descripteur decrit un parametre autorise dans le fichier :
// nom, type, caractere obligatoire, valeurs (defaut, courante, bornes)
// et les quatre codes d'evenement associes.
//
// # Types de parametres
// Le type est porte par `ParamSlot`, une variante par type avec ses
// propres valeurs :
// - Numeric / Char : min, max, defaut, courante (min <= defaut <= max)
// - Literal / Filename / Email / Ipv4 / Url : defaut et courante
//
// # Troncature
// Les noms et les valeurs texte ont une longueur maximale (voir
// constants.rs). Au-dela, la chaine est tronquee en silence pour
// l'appelant, un warn! est emis dans les traces. Une valeur validee
// (Filename, Email, Ipv4, Url) n'est tronquee qu'apres validation.

use tracing::warn;

use crate::constants::{IPV4_VALUE_MAX_LEN, TEXT_VALUE_MAX_LEN, URL_VALUE_MAX_LEN};
use crate::events::EventCodes;

/// Type d'un parametre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Numeric,
    Literal,
    Filename,
    Char,
    Email,
    Ipv4,
    Url,
}

impl ParamKind {
    /// Nom du type en minuscules.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Literal => "literal",
            Self::Filename => "filename",
            Self::Char => "char",
            Self::Email => "email",
            Self::Ipv4 => "ipv4",
            Self::Url => "url",
        }
    }

    /// Longueur max stockee pour les types texte.
    pub fn value_max_len(&self) -> Option<usize> {
        match self {
            Self::Literal | Self::Filename | Self::Email => Some(TEXT_VALUE_MAX_LEN),
            Self::Url => Some(URL_VALUE_MAX_LEN),
            Self::Ipv4 => Some(IPV4_VALUE_MAX_LEN),
            Self::Numeric | Self::Char => None,
        }
    }
}

/// Valeur bornee (numerique ou caractere).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranged<T> {
    pub min: T,
    pub max: T,
    pub default: T,
    pub current: T,
}

impl<T: PartialOrd + Copy> Ranged<T> {
    /// Retourne None si `min <= default <= max` n'est pas respecte.
    pub(crate) fn new(min: T, max: T, default: T) -> Option<Self> {
        (min <= default && default <= max).then_some(Self { min, max, default, current: default })
    }

    /// Vrai si la valeur est dans [min, max].
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Valeur texte (literal, filename, email, ipv4, url).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub default: String,
    pub current: String,
}

impl Text {
    pub(crate) fn new(default: String) -> Self {
        Self { current: default.clone(), default }
    }
}

/// Valeurs d'un parametre, selon son type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamSlot {
    Numeric(Ranged<i32>),
    Char(Ranged<char>),
    Literal(Text),
    Filename(Text),
    Email(Text),
    Ipv4(Text),
    Url(Text),
}

impl ParamSlot {
    /// Type du parametre.
    pub fn kind(&self) -> ParamKind {
        match self {
            Self::Numeric(_) => ParamKind::Numeric,
            Self::Char(_) => ParamKind::Char,
            Self::Literal(_) => ParamKind::Literal,
            Self::Filename(_) => ParamKind::Filename,
            Self::Email(_) => ParamKind::Email,
            Self::Ipv4(_) => ParamKind::Ipv4,
            Self::Url(_) => ParamKind::Url,
        }
    }

    /// Remet la valeur courante a sa valeur par defaut.
    pub(crate) fn restore_default(&mut self) {
        match self {
            Self::Numeric(r) => r.current = r.default,
            Self::Char(r) => r.current = r.default,
            Self::Literal(t) | Self::Filename(t) | Self::Email(t) | Self::Ipv4(t) | Self::Url(t) => {
                t.current.clone_from(&t.default);
            }
        }
    }
}

/// Descripteur d'un parametre enregistre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDescriptor {
    pub(crate) name: String,
    pub(crate) mandatory: bool,
    pub(crate) provisioned: bool,
    pub(crate) slot: ParamSlot,
    pub(crate) events: EventCodes,
}

impl ParamDescriptor {
    pub(crate) fn new(name: String, mandatory: bool, slot: ParamSlot, events: EventCodes) -> Self {
        Self { name, mandatory, provisioned: false, slot, events }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ParamKind {
        self.slot.kind()
    }

    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    /// Vrai si le dernier parsing a lu une valeur valide pour ce parametre.
    pub fn is_provisioned(&self) -> bool {
        self.provisioned
    }

    pub fn slot(&self) -> &ParamSlot {
        &self.slot
    }

    pub fn events(&self) -> &EventCodes {
        &self.events
    }

    /// Etat d'avant parsing : non provisionne, valeur par defaut.
    pub(crate) fn restore_default(&mut self) {
        self.provisioned = false;
        self.slot.restore_default();
    }
}

/// Tronque une chaine a `max` caracteres, sans couper un caractere UTF-8.
pub(crate) fn clip(value: &str, max: usize, what: &str) -> String {
    match value.char_indices().nth(max) {
        Some((cut, _)) => {
            warn!(max, len = value.chars().count(), "{what} truncated");
            value[..cut].to_string()
        }
        None => value.to_string(),
    }
}
