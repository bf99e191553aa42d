// ParamFile - Validation des adresses IPv4
//
// Format accepte : a.b.c.d, quatre groupes de chiffres entre 0 et 255.
// Les zeros en tete sont acceptes ("010" vaut 10).

use crate::validate::blanks::only_digits;

/// Valide une adresse IPv4 et retourne sa valeur empaquetee big-endian.
///
/// `(a << 24) | (b << 16) | (c << 8) | d`, ou `None` si la chaine n'est
/// pas une adresse valide.
pub fn validate_ipv4(addr: &str) -> Option<u32> {
    let mut packed = 0u32;
    let mut groups = 0;
    for group in addr.split('.') {
        groups += 1;
        if groups > 4 || !only_digits(group) {
            return None;
        }
        let octet: u32 = group.parse().ok()?;
        if octet > 255 {
            return None;
        }
        packed = (packed << 8) | octet;
    }
    (groups == 4).then_some(packed)
}
