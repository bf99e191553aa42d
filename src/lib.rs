// ParamFile - Arbre de modules (crate library)
//
// Ce fichier constitue le point d'entree de la crate library de ParamFile.
// Il re-exporte les types publics pour le binaire et les tests
// d'integration.
//
// # Modules
// - `constants` : limites du moteur (capacite, longueurs, sentinelle)
// - `error`     : types d'erreur centralises (CfgError, CfgResult)
// - `events`    : codes et liste des evenements de diagnostic
// - `parser`    : lecture ligne par ligne d'un fichier de configuration
// - `registry`  : parametres autorises, valeurs par defaut, getters types
// - `validate`  : validateurs (fichier, e-mail, IPv4, URL, chiffres)
//
// # Exemple
// ```no_run
// use paramfile::{EventCodes, ParamRegistry};
//
// let mut registry = ParamRegistry::new();
// registry.add_numeric("PORT", true, 1, 65535, 8080, EventCodes::none())?;
// let outcome = registry.parse("server.cfg")?;
// let (port, provisioned) = registry.get_numeric("PORT")?;
// # Ok::<(), paramfile::CfgError>(())
// ```
//
// Le moteur n'est pas thread-safe : un registre appartient a un seul
// appelant a la fois.

/// Constantes globales du moteur.
pub mod constants;
/// Types d'erreur centralises.
pub mod error;
/// Evenements de diagnostic produits par le parsing.
pub mod events;
/// Parseur de fichiers de configuration.
pub mod parser;
/// Registre des parametres autorises.
pub mod registry;
/// Validateurs de valeurs.
pub mod validate;

pub use error::{CfgError, CfgResult};
pub use events::{Event, EventCode, EventCodes, EventKind, EventList};
pub use parser::ParseOutcome;
pub use registry::{ParamDescriptor, ParamKind, ParamRegistry, ParamSlot};
