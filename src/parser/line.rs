// ParamFile - Analyse d'une ligne
//
// # Etapes
// 1. Copie de la ligne sans blancs : vide ou commencant par '#' -> ignoree
// 2. Recherche du premier parametre (ordre d'enregistrement) dont le nom
//    est suivi immediatement de '=' dans la copie
// 3. Extraction de la valeur dans la ligne ORIGINALE, pour garder les
//    espaces internes : apres le premier '=', blancs de tete sautes,
//    jusqu'au premier '#' ou la fin de ligne
//
// Parametre introuvable -> ParamUnknown ; '=' absent ou valeur vide
// -> FormatError. Les deux sont fatales pour tout le parsing.

use crate::error::{CfgError, CfgResult};
use crate::registry::ParamDescriptor;
use crate::validate::copy_without_blanks;

/// Resultat de l'analyse d'une ligne.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LineAction<'a> {
    /// Ligne vide ou commentaire
    Skip,
    /// Affectation du parametre `index` avec le texte brut `value`
    Assign { index: usize, value: &'a str },
}

/// Analyse une ligne (sans son terminateur) contre les parametres enregistres.
pub(crate) fn analyze<'a>(
    raw: &'a str,
    params: &[ParamDescriptor],
    line: u16,
) -> CfgResult<LineAction<'a>> {
    let stripped = copy_without_blanks(raw);
    if stripped.is_empty() || stripped.starts_with('#') {
        return Ok(LineAction::Skip);
    }

    let index = params
        .iter()
        .position(|p| assigns(&stripped, p.name()))
        .ok_or(CfgError::ParamUnknown { line })?;

    let value = extract_value(raw).ok_or(CfgError::FormatError { line })?;
    Ok(LineAction::Assign { index, value })
}

/// Vrai si la ligne sans blancs commence par `name=`.
fn assigns(stripped: &str, name: &str) -> bool {
    stripped
        .strip_prefix(name)
        .is_some_and(|rest| rest.starts_with('='))
}

/// Texte de la valeur dans la ligne originale, None si mal formee.
pub(crate) fn extract_value(raw: &str) -> Option<&str> {
    // Le premier '=' doit preceder tout commentaire
    let pos = raw.find(['=', '#'])?;
    if !raw[pos..].starts_with('=') {
        return None;
    }
    let value = raw[pos + 1..].trim_start_matches([' ', '\t']);
    if value.is_empty() || value.starts_with('#') {
        return None;
    }
    let end = value.find('#').unwrap_or(value.len());
    Some(&value[..end])
}
