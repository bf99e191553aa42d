// ParamFile - Constantes globales
//
// Ce module centralise toutes les limites du moteur :
// - Capacite du registre (defaut, maximum)
// - Code d'evenement sentinelle
// - Politique de troncature des noms et des valeurs
// - Limites des validateurs (fichier, e-mail, URL)
//
// Les constantes sont utilisees par les modules validate, registry
// et parser pour garantir la coherence des valeurs.

/// Capacite du registre quand `init` n'est pas appele
pub const DEFAULT_CAPACITY: usize = 8;

/// Capacite maximale acceptee par `init`
pub const MAX_CAPACITY: usize = 255;

/// Code d'evenement "non defini" : aucun evenement n'est emis
pub const EVENT_UNDEFINED: u8 = 255;

/// Longueur max d'un nom de parametre (caracteres), au-dela tronque
pub const NAME_MAX_LEN: usize = 31;

/// Longueur max d'une valeur literal / filename / email (caracteres)
pub const TEXT_VALUE_MAX_LEN: usize = 127;

/// Longueur max d'une valeur url (caracteres)
pub const URL_VALUE_MAX_LEN: usize = 255;

/// Longueur max d'une valeur ipv4 (caracteres)
pub const IPV4_VALUE_MAX_LEN: usize = 31;

/// Longueur max d'un nom de fichier (FILENAME_MAX sous Linux)
pub const FILENAME_MAX_LEN: usize = 4096;

/// Longueur max d'une adresse e-mail
pub const EMAIL_MAX_LEN: usize = 128;

/// Longueur max d'une URL
pub const URL_MAX_LEN: usize = 256;

/// Port TCP/UDP maximal accepte dans une URL
pub const URL_MAX_PORT: u32 = 65_535;

/// Caracteres interdits dans un nom de fichier
pub const FILENAME_FORBIDDEN: &str = "|!\"£$%()=?'^\\[]*+@#;:,<>&";

/// Caracteres interdits dans la query et le fragment d'une URL
pub const URL_QUERY_FORBIDDEN: &str = "|!\"£$()?'^\\[]*+@#;:,<>";

/// Schemas acceptes devant `://` (hors `mailto`, traite a part)
pub const URL_SCHEMES: [&str; 9] = [
    "http", "https", "ftp", "ftps", "sftp", "gopher", "news", "telnet", "aim",
];
