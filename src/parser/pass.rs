// ParamFile - Passe de parsing
//
// Une passe lit une source ligne par ligne et met a jour le registre.
//
// # Deroulement
// 1. Pre-passe : tous les parametres non provisionnes, valeur par defaut
// 2. Boucle : chaque ligne est comptee (base 1), analysee (module line),
//    puis la valeur est appliquee (module value). Une valeur invalide
//    produit l'evenement "malformed", une valeur valide deja vue produit
//    l'evenement "redefined".
// 3. Post-passe : un evenement "missing" (ligne 0) par parametre non
//    provisionne, dans l'ordre du registre
// 4. Le registre est marque comme parse, les getters deviennent actifs
//
// Toute erreur (format, parametre inconnu, lecture) arrete la passe :
// les evenements deja collectes sont abandonnes.
//
// # Lignes
// Coupure sur '\n', un '\r' final fait partie du terminateur. Les octets
// non UTF-8 sont remplaces (lecture lossy). Le compteur sature a u16::MAX.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{CfgError, CfgResult};
use crate::events::{EventKind, EventList};
use crate::parser::line::{analyze, LineAction};
use crate::parser::value;
use crate::parser::ParseOutcome;
use crate::registry::{ParamDescriptor, ParamRegistry};

/// Nom de source utilise dans les erreurs de `parse_reader`.
const READER_SOURCE: &str = "<reader>";

impl ParamRegistry {
    /// Ouvre et parse un fichier de configuration.
    ///
    /// Le fichier est ferme a la sortie, y compris sur erreur.
    pub fn parse(&mut self, path: impl AsRef<Path>) -> CfgResult<ParseOutcome> {
        let path = path.as_ref();
        self.restore_defaults();

        if path.as_os_str().is_empty() {
            return Err(CfgError::NoAccess {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "empty path"),
            });
        }
        let file = File::open(path).map_err(|source| CfgError::NoAccess {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), params = self.len(), "parsing configuration file");
        self.run_pass(BufReader::new(file), path)
    }

    /// Parse une source deja ouverte (fichier, memoire, stdin...).
    pub fn parse_reader<R: BufRead>(&mut self, reader: R) -> CfgResult<ParseOutcome> {
        self.restore_defaults();
        debug!(params = self.len(), "parsing configuration from reader");
        self.run_pass(reader, Path::new(READER_SOURCE))
    }

    fn restore_defaults(&mut self) {
        for param in &mut self.params {
            param.restore_default();
        }
    }

    fn run_pass<R: BufRead>(&mut self, mut reader: R, source: &Path) -> CfgResult<ParseOutcome> {
        let mut events = EventList::new();
        let mut line: u16 = 0;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).map_err(|e| CfgError::NoAccess {
                path: source.to_path_buf(),
                source: e,
            })?;
            if read == 0 {
                break;
            }
            line = line.saturating_add(1);

            let text = String::from_utf8_lossy(&buf);
            let raw = strip_terminator(&text);

            match analyze(raw, &self.params, line) {
                Ok(LineAction::Skip) => trace!(line, "blank or comment line skipped"),
                Ok(LineAction::Assign { index, value }) => {
                    assign(&mut self.params[index], value, line, &mut events);
                }
                Err(e) => {
                    debug!(line, error = %e, discarded = events.len(), "parse aborted");
                    return Err(e);
                }
            }
        }

        for param in self.params.iter().filter(|p| !p.provisioned) {
            let kind = if param.mandatory {
                EventKind::MandatoryMissing
            } else {
                EventKind::OptionalMissing
            };
            record(&mut events, param, kind, 0);
        }

        self.parsed = true;
        debug!(lines = line, events = events.len(), "configuration parsed");
        Ok(ParseOutcome { line_count: line, events })
    }
}

/// Applique la valeur d'une ligne a son parametre et note les evenements.
fn assign(param: &mut ParamDescriptor, value: &str, line: u16, events: &mut EventList) {
    if value::apply(&mut param.slot, value) {
        if param.provisioned {
            record(events, param, EventKind::Redefined, line);
        }
        param.provisioned = true;
    } else {
        record(events, param, EventKind::Malformed, line);
    }
}

fn record(events: &mut EventList, param: &ParamDescriptor, kind: EventKind, line: u16) {
    let code = param.events.code(kind);
    if events.append(code, line, kind, &param.name) {
        debug!(param = %param.name, code = code.value(), line, "{}", kind.as_str());
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
