// ParamFile - Validation des noms de fichiers
//
// Un nom valide commence par une lettre, un chiffre, un point, un slash
// ou un underscore, et ne contient aucun caractere de FILENAME_FORBIDDEN.

use crate::constants::{FILENAME_FORBIDDEN, FILENAME_MAX_LEN};

/// Verifie qu'une chaine est un nom de fichier (ou de repertoire) acceptable.
pub fn validate_filename(name: &str) -> bool {
    if name.is_empty() || name.len() > FILENAME_MAX_LEN {
        return false;
    }
    if name.chars().any(|c| FILENAME_FORBIDDEN.contains(c)) {
        return false;
    }
    match name.chars().next() {
        Some(c) => c.is_ascii_alphanumeric() || matches!(c, '.' | '/' | '_'),
        None => false,
    }
}
