// ParamFile - Module validate
// Validateurs de valeurs, sans etat et sans effet de bord
//
// Ces fonctions sont appelees par le registre (controle des valeurs
// par defaut) et par le parseur (controle des valeurs lues), mais
// restent utilisables seules.
//
// # Sous-modules
// - `blanks`   : suppression des blancs, tabulations et retours ligne,
//                test "que des chiffres"
// - `filename` : noms de fichiers acceptables
// - `email`    : adresses e-mail (heuristique simplifiee, pas la RFC)
//                et regle de syntaxe des noms de domaine
// - `ipv4`     : adresses a.b.c.d, conversion en u32 big-endian
// - `url`      : URL [schema://]hote[:port][/chemin][?query][#fragment]
//
// # Limites connues
// Les regles sont volontairement simplifiees : pas d'authentification
// dans les URL, pas de controle de longueur du TLD, query et fragment
// seulement controles sur leur jeu de caracteres.

/// Suppression des blancs et test numerique.
pub mod blanks;
/// Validation des adresses e-mail et des noms de domaine.
pub mod email;
/// Validation des noms de fichiers.
pub mod filename;
/// Validation et conversion des adresses IPv4.
pub mod ipv4;
/// Validation des URL.
pub mod url;

pub use blanks::{copy_without_blanks, is_blank, only_digits, remove_blanks_in_place};
pub use email::validate_email;
pub use filename::validate_filename;
pub use ipv4::validate_ipv4;
pub use url::validate_url;
