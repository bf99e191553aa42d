// ParamFile - Module registry
// Parametres autorises dans un fichier de configuration
//
// Le registre est construit par l'appelant avant le parsing : chaque
// appel `add_*` decrit un parametre (nom, type, obligatoire ou non,
// bornes, valeur par defaut, codes d'evenement). Apres un parsing
// reussi, les getters `get_*` retournent la valeur courante et
// l'indicateur de provisionnement.
//
// # Sous-modules
// - `descriptor` : `ParamDescriptor`, `ParamKind`, `ParamSlot` et les
//                  valeurs bornees ou texte de chaque type
// - `store`      : `ParamRegistry`, capacite, ajout et lecture typee

/// Descripteurs de parametres et valeurs par type.
pub mod descriptor;
/// Registre ordonne des parametres.
pub mod store;

pub use descriptor::{ParamDescriptor, ParamKind, ParamSlot, Ranged, Text};
pub use store::ParamRegistry;
