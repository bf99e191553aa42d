// ParamFile - Module parser
// Lecture d'un fichier de configuration contre un registre de parametres
//
// # Format supporte
// ```text
// # commentaire, ignore
// NOM = valeur texte   # commentaire de fin optionnel
// NOM2 = "X"           # parametre caractere
// ```
// - Une affectation par ligne, lignes vides et commentaires ignores
// - Blancs indifferents autour du nom (`NOM=v` et `NOM = v` identiques)
// - La valeur garde ses espaces internes jusqu'au '#' ou la fin de ligne,
//   seuls les blancs qui suivent '=' sont sautes
// - Pas de continuation de ligne, pas de guillemets sauf `"X"` pour les
//   parametres caractere
//
// # Sous-modules
// - `line`  : classement d'une ligne et extraction de la valeur brute
// - `value` : conversion et controle de la valeur selon le type
// - `pass`  : `ParamRegistry::parse` et `parse_reader`

/// Analyse d'une ligne.
mod line;
/// Passe complete sur un fichier ou un lecteur.
mod pass;
/// Conversion des valeurs par type.
mod value;

use crate::events::EventList;

/// Resultat d'un parsing reussi.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Nombre total de lignes lues
    pub line_count: u16,
    /// Evenements, dans l'ordre du fichier puis du registre
    pub events: EventList,
}
