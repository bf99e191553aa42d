// ParamFile - Module events
// Liste ordonnee des evenements de diagnostic produits par un parsing
//
// Un evenement associe un code choisi par l'appelant (petit entier
// opaque) a une ligne du fichier. La ligne 0 designe les evenements
// emis apres lecture complete (parametre absent du fichier).
//
// # Sous-modules
// - `list` : `EventCode`, `EventKind`, `Event` et `EventList`
//
// # Ordre
// Les evenements lies a une ligne apparaissent dans l'ordre du fichier,
// suivis des evenements "parametre absent" dans l'ordre du registre.

/// Codes, evenements et liste d'evenements.
pub mod list;

pub use list::{Event, EventCode, EventCodes, EventKind, EventList};
