// ParamFile - Point d'entree
// Outil en ligne de commande autour du moteur de configuration
//
// Ce binaire expose les validateurs et le parseur :
// - `paramfile email|ipv4|url|filename <VALEUR>` : valide une valeur,
//   code de sortie 0 si valide, 1 sinon
// - `paramfile check <FICHIER>` : parse un fichier contenant les
//   parametres optionnels `email`, `ip` et `url`, affiche les evenements
//   puis les valeurs retenues
//
// # Traces
// Niveau `warn` par defaut, `debug` avec `--verbose`. La variable
// RUST_LOG est prioritaire si elle est definie.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;

use paramfile::validate::{validate_email, validate_filename, validate_ipv4, validate_url};
use paramfile::{CfgResult, Event, EventCode, EventCodes, EventKind, ParamRegistry};

const EMAIL_PARAM: &str = "email";
const IPV4_PARAM: &str = "ip";
const URL_PARAM: &str = "url";

// Codes d'evenement du schema de demonstration
const MAIL_NOT_PROV: u8 = 1;
const MAIL_REDEF: u8 = 2;
const MAIL_NOT_VALID: u8 = 3;
const IPV4_NOT_PROV: u8 = 4;
const IPV4_REDEF: u8 = 5;
const IPV4_NOT_VALID: u8 = 6;
const URL_NOT_PROV: u8 = 7;
const URL_REDEF: u8 = 8;
const URL_NOT_VALID: u8 = 9;

/// Arguments de la ligne de commande.
#[derive(Parser, Debug)]
#[command(name = "paramfile")]
#[command(about = "Validate values and key = value configuration files")]
struct Args {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check an e-mail address
    Email { value: String },
    /// Check an IPv4 address (a.b.c.d) and print its packed value
    Ipv4 { value: String },
    /// Check a URL
    Url { value: String },
    /// Check a file name
    Filename { value: String },
    /// Parse a configuration file with optional email, ip and url parameters
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Point d'entree principal de ParamFile.
///
/// Les erreurs fatales sont affichees sur stderr avec la ligne fautive
/// quand elle est connue.
fn main() -> ExitCode {
    let args = Args::parse();
    setup_tracing(args.verbose);

    match run(args.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("paramfile error: {}", e);
            if let Some(line) = e.line() {
                eprintln!("error occurred at line {}", line);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> CfgResult<bool> {
    match command {
        Command::Email { value } => Ok(report("e-mail", &value, validate_email(&value))),
        Command::Url { value } => Ok(report("URL", &value, validate_url(&value))),
        Command::Filename { value } => Ok(report("file name", &value, validate_filename(&value))),
        Command::Ipv4 { value } => match validate_ipv4(&value) {
            Some(packed) => {
                println!("'{}' is a valid IPv4 address ({:#010x})", value, packed);
                Ok(true)
            }
            None => Ok(report("IPv4 address", &value, false)),
        },
        Command::Check { file } => check(&file),
    }
}

fn report(what: &str, value: &str, valid: bool) -> bool {
    if valid {
        println!("'{}' is a valid {}", value, what);
    } else {
        println!("'{}' is not a valid {}", value, what);
    }
    valid
}

/// Schema de demonstration : trois parametres optionnels avec defaut.
fn demo_registry() -> CfgResult<ParamRegistry> {
    let mut registry = ParamRegistry::with_capacity(3)?;
    registry.add_email(
        EMAIL_PARAM,
        false,
        "test@mail.com",
        EventCodes::new(
            EventCode::UNDEFINED,
            MAIL_NOT_PROV.into(),
            MAIL_REDEF.into(),
            MAIL_NOT_VALID.into(),
        ),
    )?;
    registry.add_ipv4(
        IPV4_PARAM,
        false,
        "127.0.0.1",
        EventCodes::new(
            EventCode::UNDEFINED,
            IPV4_NOT_PROV.into(),
            IPV4_REDEF.into(),
            IPV4_NOT_VALID.into(),
        ),
    )?;
    registry.add_url(
        URL_PARAM,
        false,
        "https://127.0.0.1:8443",
        EventCodes::new(
            EventCode::UNDEFINED,
            URL_NOT_PROV.into(),
            URL_REDEF.into(),
            URL_NOT_VALID.into(),
        ),
    )?;
    Ok(registry)
}

fn check(file: &Path) -> CfgResult<bool> {
    let mut registry = demo_registry()?;
    let outcome = registry.parse(file)?;
    debug!(events = outcome.events.len(), "demo schema parsed");

    println!("configuration file read successfully (total lines {})", outcome.line_count);
    for event in &outcome.events {
        eprintln!("{}", describe(event));
    }

    let (email, _) = registry.get_email(EMAIL_PARAM)?;
    let (ip, _) = registry.get_ipv4(IPV4_PARAM)?;
    let (url, _) = registry.get_url(URL_PARAM)?;
    println!("{}: {}", EMAIL_PARAM, email);
    println!("{}: {}", IPV4_PARAM, ip);
    println!("{}: {}", URL_PARAM, url);
    Ok(true)
}

/// Message utilisateur pour un evenement.
fn describe(event: &Event) -> String {
    match event.kind {
        EventKind::MandatoryMissing | EventKind::OptionalMissing => {
            format!("parameter {} not provisioned, default used", event.param)
        }
        EventKind::Redefined => {
            format!("parameter {} redefined at line {}", event.param, event.line)
        }
        EventKind::Malformed => {
            format!("parameter {} defined at line {} is not valid", event.param, event.line)
        }
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("paramfile=debug")
        } else {
            EnvFilter::new("paramfile=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        let args = Args::try_parse_from(["paramfile", "-v", "ipv4", "10.0.0.1"]).unwrap();
        assert!(args.verbose);
        assert!(matches!(args.command, Command::Ipv4 { ref value } if value == "10.0.0.1"));
    }

    #[test]
    fn test_demo_registry() {
        let registry = demo_registry().unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.capacity(), 3);
    }

    #[test]
    fn test_describe() {
        let event = Event {
            code: EventCode::new(URL_REDEF),
            line: 4,
            kind: EventKind::Redefined,
            param: URL_PARAM.to_string(),
        };
        assert_eq!(describe(&event), "parameter url redefined at line 4");
    }
}
