// ParamFile - Conversion et controle des valeurs lues
//
// `apply` recoit le texte brut extrait d'une ligne et met a jour la
// valeur courante du parametre :
// - valeur valide   -> adoptee, retourne true
// - valeur invalide -> valeur par defaut restauree, retourne false
//
// # Regles par type
// - Numeric  : blancs supprimes, chiffres uniquement (pas de signe),
//              dans [min, max]
// - Char     : exactement "X" (blancs de fin toleres), X dans [min, max]
// - Literal  : texte pris tel quel, jamais refuse
// - Filename / Email / Ipv4 / Url : validateur du module validate
//
// Le texte complet passe le validateur ; seule une valeur acceptee est
// ensuite tronquee a la longueur max de son type.

use crate::registry::descriptor::{clip, Ranged, Text};
use crate::registry::ParamSlot;
use crate::validate::{
    copy_without_blanks, only_digits, validate_email, validate_filename, validate_ipv4,
    validate_url,
};

/// Applique une valeur brute au parametre. Retourne false si mal formee.
pub(crate) fn apply(slot: &mut ParamSlot, raw: &str) -> bool {
    let max = slot.kind().value_max_len().unwrap_or(usize::MAX);
    match slot {
        ParamSlot::Numeric(r) => adopt(r, parse_numeric(raw)),
        ParamSlot::Char(r) => adopt(r, parse_quoted_char(raw)),
        ParamSlot::Literal(t) => {
            t.current = clip(raw, max, "literal value");
            true
        }
        ParamSlot::Filename(t) => adopt_text(t, raw, max, validate_filename),
        ParamSlot::Email(t) => adopt_text(t, raw, max, validate_email),
        ParamSlot::Ipv4(t) => adopt_text(t, raw, max, |s| validate_ipv4(s).is_some()),
        ParamSlot::Url(t) => adopt_text(t, raw, max, validate_url),
    }
}

fn adopt<T: PartialOrd + Copy>(range: &mut Ranged<T>, value: Option<T>) -> bool {
    match value.filter(|v| range.contains(*v)) {
        Some(v) => {
            range.current = v;
            true
        }
        None => {
            range.current = range.default;
            false
        }
    }
}

fn adopt_text(text: &mut Text, raw: &str, max: usize, valid: impl Fn(&str) -> bool) -> bool {
    if valid(raw) {
        text.current = clip(raw, max, "value");
        true
    } else {
        text.current.clone_from(&text.default);
        false
    }
}

/// Entier positif, les blancs internes sont ignores ("1 000" vaut 1000).
fn parse_numeric(raw: &str) -> Option<i32> {
    let digits = copy_without_blanks(raw);
    if !only_digits(&digits) {
        return None;
    }
    digits.parse().ok()
}

/// Caractere entre guillemets : `"X"`, suivi eventuellement de blancs.
fn parse_quoted_char(raw: &str) -> Option<char> {
    let mut chars = raw.strip_prefix('"')?.chars();
    let c = chars.next()?;
    let tail = chars.as_str().strip_prefix('"')?;
    tail.chars().all(|c| c == ' ' || c == '\t').then_some(c)
}
