// ParamFile - Blancs et chiffres
//
// Seuls l'espace, la tabulation et le retour ligne sont consideres
// comme des blancs. Les autres espaces Unicode (retour chariot, espace
// insecable...) sont conserves tels quels.

/// Vrai pour espace, tabulation et retour ligne.
#[inline]
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Supprime tous les blancs de la chaine, sur place.
pub fn remove_blanks_in_place(s: &mut String) {
    s.retain(|c| !is_blank(c));
}

/// Copie la chaine sans ses blancs, l'originale est inchangee.
pub fn copy_without_blanks(src: &str) -> String {
    src.chars().filter(|&c| !is_blank(c)).collect()
}

/// Vrai si la chaine est non vide et ne contient que des chiffres 0-9.
pub fn only_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
