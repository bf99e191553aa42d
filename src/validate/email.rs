// ParamFile - Validation des adresses e-mail
//
// Format accepte : partie_locale@domaine.tld
// - longueur totale entre 1 et EMAIL_MAX_LEN
// - coupure sur le premier '@', un second '@' tombe dans le domaine
//   et y est refuse par le jeu de caracteres
// - chaque partie : non vide, pas de '.' en debut ou fin, pas de '..',
//   caracteres [A-Za-z0-9_.-] uniquement
// - le domaine contient au moins un '.'
//
// La longueur du TLD n'est pas controlee. La regle du domaine est
// partagee avec la validation de l'hote des URL.

use crate::constants::EMAIL_MAX_LEN;

/// Verifie qu'une chaine est une adresse e-mail syntaxiquement correcte.
pub fn validate_email(email: &str) -> bool {
    if email.is_empty() || email.len() > EMAIL_MAX_LEN {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    is_valid_label(local) && is_valid_domain(domain)
}

/// Regle de syntaxe d'un nom de domaine (partie droite d'un e-mail, hote d'URL).
pub(crate) fn is_valid_domain(domain: &str) -> bool {
    is_valid_label(domain) && domain.contains('.')
}

fn is_valid_label(s: &str) -> bool {
    if s.is_empty() || s.starts_with('.') || s.ends_with('.') {
        return false;
    }
    if s.contains("..") {
        return false;
    }
    s.bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.'))
}
