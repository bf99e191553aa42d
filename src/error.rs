// ParamFile - Types d'erreur centralises
//
// Ce module definit l'enumeration `CfgError` et le type alias
// `CfgResult<T>` utilises dans toute la crate.
//
// # Categories d'erreurs
// - Enregistrement : `InvalidArgument`, `Overflow`, `WrongDefault`,
//   `AlreadyInitialized`
// - Lecture des valeurs : `NotParsed`, `UnknownParameter`
// - Parsing : `NoAccess`, `FormatError`, `ParamUnknown` (fatales, la
//   liste d'evenements en cours est abandonnee)
//
// Les valeurs mal formees, redefinies ou manquantes ne sont PAS des
// erreurs : elles sont reportees dans la liste d'evenements.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Enumeration de toutes les erreurs possibles dans ParamFile.
#[derive(Debug, Error)]
pub enum CfgError {
    /// Argument d'enregistrement invalide (nom vide)
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Capacite du registre depassee ou hors bornes
    #[error("parameter registry overflow (capacity {capacity})")]
    Overflow {
        /// Capacite en vigueur ou demandee
        capacity: usize,
    },

    /// Valeur par defaut incompatible avec son propre type
    #[error("default value of parameter '{0}' violates its constraints")]
    WrongDefault(String),

    /// `init` appele apres un enregistrement ou un autre `init`
    #[error("parameter registry already initialized, reset it first")]
    AlreadyInitialized,

    /// Lecture d'une valeur avant tout parsing reussi
    #[error("configuration file not parsed yet")]
    NotParsed,

    /// Parametre inconnu pour ce type
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    /// Fichier absent, illisible ou chemin vide
    #[error("unable to access configuration file '{}': {source}", .path.display())]
    NoAccess {
        /// Chemin demande
        path: PathBuf,
        /// Erreur d'I/O sous-jacente
        #[source]
        source: io::Error,
    },

    /// Ligne mal formee (pas de `=`, valeur vide)
    #[error("configuration file wrongly formatted at line {line}")]
    FormatError {
        /// Ligne fautive (base 1)
        line: u16,
    },

    /// Ligne assignant un parametre non enregistre
    #[error("unrecognized parameter at line {line}")]
    ParamUnknown {
        /// Ligne fautive (base 1)
        line: u16,
    },
}

impl CfgError {
    /// Ligne associee a une erreur de format ou de parametre inconnu.
    pub fn line(&self) -> Option<u16> {
        match self {
            CfgError::FormatError { line } | CfgError::ParamUnknown { line } => Some(*line),
            _ => None,
        }
    }
}

/// Type Result specialise pour ParamFile.
pub type CfgResult<T> = Result<T, CfgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_only_for_file_errors() {
        assert_eq!(CfgError::FormatError { line: 4 }.line(), Some(4));
        assert_eq!(CfgError::ParamUnknown { line: 9 }.line(), Some(9));
        assert_eq!(CfgError::NotParsed.line(), None);
    }

    #[test]
    fn test_display() {
        let e = CfgError::ParamUnknown { line: 3 };
        assert_eq!(e.to_string(), "unrecognized parameter at line 3");
        let e = CfgError::Overflow { capacity: 8 };
        assert_eq!(e.to_string(), "parameter registry overflow (capacity 8)");
    }
}
