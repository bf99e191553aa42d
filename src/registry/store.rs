// ParamFile - Registre des parametres
// Liste ordonnee de descripteurs, capacite fixee une fois
//
// # Cycle de vie
// 1. `ParamRegistry::new()` (ou `reset`) : vide, capacite DEFAULT_CAPACITY
// 2. `init(n)` optionnel : fixe la capacite (1..=MAX_CAPACITY)
// 3. `add_*` : ajout en queue, refuse quand la capacite est atteinte
// 4. `parse` (module parser) : remplit les valeurs courantes
// 5. `get_*` : lecture typee, uniquement apres un parsing reussi
//
// # Noms en double
// Aucun controle d'unicite : deux parametres peuvent porter le meme nom.
// La recherche retourne toujours le premier dans l'ordre d'ajout.
//
// # Ordre des controles a l'ajout
// Capacite (Overflow), puis nom (InvalidArgument), puis valeur par
// defaut (WrongDefault). Un ajout refuse ne modifie pas le registre.

use std::net::Ipv4Addr;

use tracing::debug;

use crate::constants::{DEFAULT_CAPACITY, MAX_CAPACITY, NAME_MAX_LEN};
use crate::error::{CfgError, CfgResult};
use crate::events::EventCodes;
use crate::registry::descriptor::{clip, ParamDescriptor, ParamKind, ParamSlot, Ranged, Text};
use crate::validate::{validate_email, validate_filename, validate_ipv4, validate_url};

/// Registre des parametres autorises dans un fichier de configuration.
///
/// Pas de synchronisation interne : un registre par thread, ou un
/// verrou externe si plusieurs threads doivent le partager.
#[derive(Debug, Clone)]
pub struct ParamRegistry {
    pub(crate) params: Vec<ParamDescriptor>,
    capacity: usize,
    initialized: bool,
    pub(crate) parsed: bool,
}

impl Default for ParamRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamRegistry {
    /// Cree un registre vide de capacite DEFAULT_CAPACITY.
    pub fn new() -> Self {
        Self {
            params: Vec::new(),
            capacity: DEFAULT_CAPACITY,
            initialized: false,
            parsed: false,
        }
    }

    /// Cree un registre et fixe sa capacite.
    pub fn with_capacity(capacity: usize) -> CfgResult<Self> {
        let mut registry = Self::new();
        registry.init(capacity)?;
        Ok(registry)
    }

    /// Supprime tous les parametres et revient a l'etat initial.
    pub fn reset(&mut self) {
        self.params = Vec::new();
        self.capacity = DEFAULT_CAPACITY;
        self.initialized = false;
        self.parsed = false;
    }

    /// Fixe la capacite du registre.
    ///
    /// Echoue si un parametre a deja ete ajoute ou si `init` a deja ete
    /// appele depuis le dernier `reset`.
    pub fn init(&mut self, capacity: usize) -> CfgResult<()> {
        if self.initialized || !self.params.is_empty() {
            return Err(CfgError::AlreadyInitialized);
        }
        if !(1..=MAX_CAPACITY).contains(&capacity) {
            return Err(CfgError::Overflow { capacity });
        }
        self.params
            .try_reserve_exact(capacity)
            .map_err(|_| CfgError::Overflow { capacity })?;
        self.capacity = capacity;
        self.initialized = true;
        debug!(capacity, "parameter registry initialized");
        Ok(())
    }

    /// Ajoute un parametre numerique borne.
    pub fn add_numeric(
        &mut self,
        name: &str,
        mandatory: bool,
        min: i32,
        max: i32,
        default: i32,
        events: EventCodes,
    ) -> CfgResult<()> {
        self.register(name, mandatory, events, |name| {
            Ranged::new(min, max, default)
                .map(ParamSlot::Numeric)
                .ok_or_else(|| CfgError::WrongDefault(name.to_string()))
        })
    }

    /// Ajoute un parametre texte libre. Aucune valeur n'est refusee.
    pub fn add_literal(
        &mut self,
        name: &str,
        mandatory: bool,
        default: &str,
        events: EventCodes,
    ) -> CfgResult<()> {
        self.register(name, mandatory, events, |_| {
            Ok(ParamSlot::Literal(text_default(ParamKind::Literal, default)))
        })
    }

    /// Ajoute un parametre nom de fichier.
    pub fn add_filename(
        &mut self,
        name: &str,
        mandatory: bool,
        default: &str,
        events: EventCodes,
    ) -> CfgResult<()> {
        self.register(name, mandatory, events, |name| {
            checked_text(name, ParamKind::Filename, default, validate_filename).map(ParamSlot::Filename)
        })
    }

    /// Ajoute un parametre caractere borne, ecrit `"X"` dans le fichier.
    pub fn add_char(
        &mut self,
        name: &str,
        mandatory: bool,
        min: char,
        max: char,
        default: char,
        events: EventCodes,
    ) -> CfgResult<()> {
        self.register(name, mandatory, events, |name| {
            Ranged::new(min, max, default)
                .map(ParamSlot::Char)
                .ok_or_else(|| CfgError::WrongDefault(name.to_string()))
        })
    }

    /// Ajoute un parametre adresse e-mail.
    pub fn add_email(
        &mut self,
        name: &str,
        mandatory: bool,
        default: &str,
        events: EventCodes,
    ) -> CfgResult<()> {
        self.register(name, mandatory, events, |name| {
            checked_text(name, ParamKind::Email, default, validate_email).map(ParamSlot::Email)
        })
    }

    /// Ajoute un parametre adresse IPv4 (forme a.b.c.d).
    pub fn add_ipv4(
        &mut self,
        name: &str,
        mandatory: bool,
        default: &str,
        events: EventCodes,
    ) -> CfgResult<()> {
        self.register(name, mandatory, events, |name| {
            checked_text(name, ParamKind::Ipv4, default, |s| validate_ipv4(s).is_some())
                .map(ParamSlot::Ipv4)
        })
    }

    /// Ajoute un parametre URL.
    pub fn add_url(
        &mut self,
        name: &str,
        mandatory: bool,
        default: &str,
        events: EventCodes,
    ) -> CfgResult<()> {
        self.register(name, mandatory, events, |name| {
            checked_text(name, ParamKind::Url, default, validate_url).map(ParamSlot::Url)
        })
    }

    /// Controles communs puis ajout en queue.
    fn register(
        &mut self,
        name: &str,
        mandatory: bool,
        events: EventCodes,
        build: impl FnOnce(&str) -> CfgResult<ParamSlot>,
    ) -> CfgResult<()> {
        if self.params.len() >= self.capacity {
            return Err(CfgError::Overflow { capacity: self.capacity });
        }
        if name.is_empty() {
            return Err(CfgError::InvalidArgument("parameter name is empty"));
        }
        let name = clip(name, NAME_MAX_LEN, "parameter name");
        let slot = build(&name)?;

        // Premiere allocation si `init` n'a pas ete appele
        if self.params.capacity() < self.capacity {
            let missing = self.capacity - self.params.len();
            self.params
                .try_reserve_exact(missing)
                .map_err(|_| CfgError::Overflow { capacity: self.capacity })?;
        }

        debug!(name = %name, kind = slot.kind().as_str(), mandatory, "parameter registered");
        self.params.push(ParamDescriptor::new(name, mandatory, slot, events));
        Ok(())
    }

    /// Nombre de parametres enregistres.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Capacite en vigueur.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Vrai apres un parsing reussi.
    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// Descripteurs dans l'ordre d'enregistrement.
    pub fn descriptors(&self) -> impl Iterator<Item = &ParamDescriptor> {
        self.params.iter()
    }

    /// Premier descripteur portant ce nom, quel que soit son type.
    pub fn find(&self, name: &str) -> Option<&ParamDescriptor> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Valeur d'un parametre numerique et son indicateur de provisionnement.
    pub fn get_numeric(&self, name: &str) -> CfgResult<(i32, bool)> {
        self.lookup(name, |slot| match slot {
            ParamSlot::Numeric(r) => Some(r.current),
            _ => None,
        })
    }

    pub fn get_literal(&self, name: &str) -> CfgResult<(String, bool)> {
        self.lookup(name, |slot| match slot {
            ParamSlot::Literal(t) => Some(t.current.clone()),
            _ => None,
        })
    }

    pub fn get_filename(&self, name: &str) -> CfgResult<(String, bool)> {
        self.lookup(name, |slot| match slot {
            ParamSlot::Filename(t) => Some(t.current.clone()),
            _ => None,
        })
    }

    pub fn get_char(&self, name: &str) -> CfgResult<(char, bool)> {
        self.lookup(name, |slot| match slot {
            ParamSlot::Char(r) => Some(r.current),
            _ => None,
        })
    }

    pub fn get_email(&self, name: &str) -> CfgResult<(String, bool)> {
        self.lookup(name, |slot| match slot {
            ParamSlot::Email(t) => Some(t.current.clone()),
            _ => None,
        })
    }

    /// Valeur d'un parametre IPv4 sous sa forme texte a.b.c.d.
    pub fn get_ipv4(&self, name: &str) -> CfgResult<(String, bool)> {
        self.lookup(name, |slot| match slot {
            ParamSlot::Ipv4(t) => Some(t.current.clone()),
            _ => None,
        })
    }

    /// Valeur d'un parametre IPv4 convertie, None si la valeur est vide.
    pub fn get_ipv4_addr(&self, name: &str) -> CfgResult<(Option<Ipv4Addr>, bool)> {
        let (text, provisioned) = self.get_ipv4(name)?;
        Ok((validate_ipv4(&text).map(Ipv4Addr::from), provisioned))
    }

    pub fn get_url(&self, name: &str) -> CfgResult<(String, bool)> {
        self.lookup(name, |slot| match slot {
            ParamSlot::Url(t) => Some(t.current.clone()),
            _ => None,
        })
    }

    /// Premier parametre de ce nom dont le type est accepte par `extract`.
    fn lookup<T>(
        &self,
        name: &str,
        extract: impl Fn(&ParamSlot) -> Option<T>,
    ) -> CfgResult<(T, bool)> {
        if !self.parsed {
            return Err(CfgError::NotParsed);
        }
        self.params
            .iter()
            .filter(|p| p.name == name)
            .find_map(|p| extract(&p.slot).map(|value| (value, p.provisioned)))
            .ok_or_else(|| CfgError::UnknownParameter(name.to_string()))
    }
}

/// Valeur par defaut d'un type texte, tronquee a sa longueur max.
fn text_default(kind: ParamKind, default: &str) -> Text {
    let max = kind.value_max_len().unwrap_or(usize::MAX);
    Text::new(clip(default, max, "default value"))
}

/// Comme `text_default`, mais une valeur non vide doit passer le validateur
/// avant d'etre tronquee.
fn checked_text(
    name: &str,
    kind: ParamKind,
    default: &str,
    valid: impl Fn(&str) -> bool,
) -> CfgResult<Text> {
    if !default.is_empty() && !valid(default) {
        return Err(CfgError::WrongDefault(name.to_string()));
    }
    Ok(text_default(kind, default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventCode;

    fn codes() -> EventCodes {
        EventCodes::new(EventCode::new(1), EventCode::new(2), EventCode::new(3), EventCode::new(4))
    }

    /// Marque le registre comme parse sans lire de fichier.
    fn parsed(mut registry: ParamRegistry) -> ParamRegistry {
        registry.parsed = true;
        registry
    }

    #[test]
    fn test_default_capacity() {
        let mut reg = ParamRegistry::new();
        assert_eq!(reg.capacity(), DEFAULT_CAPACITY);
        for i in 0..DEFAULT_CAPACITY {
            reg.add_literal(&format!("P{i}"), false, "", codes()).unwrap();
        }
        assert!(matches!(
            reg.add_literal("ONE_MORE", false, "", codes()),
            Err(CfgError::Overflow { capacity: 8 })
        ));
        assert_eq!(reg.len(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_init_range() {
        let mut reg = ParamRegistry::new();
        assert!(matches!(reg.init(0), Err(CfgError::Overflow { .. })));
        assert!(matches!(reg.init(256), Err(CfgError::Overflow { .. })));
        reg.init(MAX_CAPACITY).unwrap();
        assert_eq!(reg.capacity(), MAX_CAPACITY);
    }

    #[test]
    fn test_init_twice() {
        let mut reg = ParamRegistry::with_capacity(2).unwrap();
        assert!(matches!(reg.init(3), Err(CfgError::AlreadyInitialized)));
        reg.reset();
        reg.init(3).unwrap();
        assert_eq!(reg.capacity(), 3);
    }

    #[test]
    fn test_init_after_add() {
        let mut reg = ParamRegistry::new();
        reg.add_numeric("N", true, 0, 10, 5, codes()).unwrap();
        assert!(matches!(reg.init(4), Err(CfgError::AlreadyInitialized)));
    }

    #[test]
    fn test_reset() {
        let mut reg = ParamRegistry::with_capacity(1).unwrap();
        reg.add_numeric("N", true, 0, 10, 5, codes()).unwrap();
        reg.parsed = true;
        reg.reset();
        assert!(reg.is_empty());
        assert!(!reg.is_parsed());
        assert_eq!(reg.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_check_order() {
        let mut reg = ParamRegistry::with_capacity(1).unwrap();
        assert!(matches!(
            reg.add_numeric("", true, 5, 1, 3, codes()),
            Err(CfgError::InvalidArgument(_))
        ));
        reg.add_numeric("N", true, 0, 10, 5, codes()).unwrap();
        // Registre plein : Overflow avant le controle du nom
        assert!(matches!(
            reg.add_numeric("", true, 0, 10, 5, codes()),
            Err(CfgError::Overflow { .. })
        ));
    }

    #[test]
    fn test_wrong_numeric_default() {
        let mut reg = ParamRegistry::new();
        assert!(matches!(
            reg.add_numeric("N", true, 5, 1, 3, codes()),
            Err(CfgError::WrongDefault(_))
        ));
        assert!(matches!(
            reg.add_numeric("N", true, 1, 5, 6, codes()),
            Err(CfgError::WrongDefault(_))
        ));
        assert_eq!(reg.len(), 0);
    }

    #[test]
    fn test_wrong_char_default() {
        let mut reg = ParamRegistry::new();
        assert!(matches!(
            reg.add_char("C", false, 'a', 'f', 'z', codes()),
            Err(CfgError::WrongDefault(_))
        ));
        reg.add_char("C", false, 'a', 'f', 'c', codes()).unwrap();
    }

    #[test]
    fn test_wrong_text_defaults() {
        let mut reg = ParamRegistry::with_capacity(16).unwrap();
        assert!(matches!(reg.add_filename("F", false, "-bad", codes()), Err(CfgError::WrongDefault(_))));
        assert!(matches!(reg.add_email("E", false, "nobody", codes()), Err(CfgError::WrongDefault(_))));
        assert!(matches!(reg.add_ipv4("I", false, "1.2.3", codes()), Err(CfgError::WrongDefault(_))));
        assert!(matches!(reg.add_url("U", false, "bad url", codes()), Err(CfgError::WrongDefault(_))));
        assert_eq!(reg.len(), 0);

        // Defaut vide toujours accepte
        reg.add_filename("F", false, "", codes()).unwrap();
        reg.add_email("E", false, "", codes()).unwrap();
        reg.add_ipv4("I", false, "", codes()).unwrap();
        reg.add_url("U", false, "", codes()).unwrap();
        // Literal : aucune valeur refusee
        reg.add_literal("L", false, "-bad @ value", codes()).unwrap();
        assert_eq!(reg.len(), 5);
    }

    #[test]
    fn test_getters_before_parse() {
        let mut reg = ParamRegistry::new();
        reg.add_numeric("N", true, 0, 10, 5, codes()).unwrap();
        assert!(matches!(reg.get_numeric("N"), Err(CfgError::NotParsed)));
    }

    #[test]
    fn test_getter_kind_must_match() {
        let mut reg = ParamRegistry::new();
        reg.add_numeric("N", true, 0, 10, 5, codes()).unwrap();
        let reg = parsed(reg);
        assert_eq!(reg.get_numeric("N").unwrap(), (5, false));
        assert!(matches!(reg.get_literal("N"), Err(CfgError::UnknownParameter(_))));
        assert!(matches!(reg.get_numeric("n"), Err(CfgError::UnknownParameter(_))));
    }

    #[test]
    fn test_duplicate_names_first_wins() {
        let mut reg = ParamRegistry::new();
        reg.add_literal("X", false, "first", codes()).unwrap();
        reg.add_literal("X", false, "second", codes()).unwrap();
        reg.add_numeric("X", false, 0, 9, 7, codes()).unwrap();
        let reg = parsed(reg);
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.get_literal("X").unwrap().0, "first");
        // Meme nom sous un autre type : visible via son propre getter
        assert_eq!(reg.get_numeric("X").unwrap().0, 7);
        assert_eq!(reg.find("X").map(|p| p.kind()), Some(ParamKind::Literal));
    }

    #[test]
    fn test_name_truncated() {
        let mut reg = ParamRegistry::new();
        let long = "N".repeat(NAME_MAX_LEN + 9);
        reg.add_literal(&long, false, "v", codes()).unwrap();
        let reg = parsed(reg);
        let stored = reg.descriptors().next().map(|p| p.name().to_string()).unwrap();
        assert_eq!(stored.len(), NAME_MAX_LEN);
        assert!(reg.get_literal(&long).is_err());
        assert_eq!(reg.get_literal(&stored).unwrap().0, "v");
    }

    #[test]
    fn test_literal_default_truncated() {
        let mut reg = ParamRegistry::new();
        reg.add_literal("L", false, &"x".repeat(500), codes()).unwrap();
        let reg = parsed(reg);
        assert_eq!(reg.get_literal("L").unwrap().0.len(), 127);
    }

    #[test]
    fn test_overlong_invalid_defaults() {
        let mut reg = ParamRegistry::with_capacity(16).unwrap();
        let email = format!("a@example.com{}", "x".repeat(200));
        let ip = format!("{}1.2.3.4junk", "0".repeat(24));
        let url = format!("example.com/{}|bad", "a".repeat(300));
        let name = format!("{}?", "f".repeat(200));
        assert!(matches!(reg.add_email("E", false, &email, codes()), Err(CfgError::WrongDefault(_))));
        assert!(matches!(reg.add_ipv4("I", false, &ip, codes()), Err(CfgError::WrongDefault(_))));
        assert!(matches!(reg.add_url("U", false, &url, codes()), Err(CfgError::WrongDefault(_))));
        assert!(matches!(reg.add_filename("F", false, &name, codes()), Err(CfgError::WrongDefault(_))));
        assert!(reg.is_empty());

        // Defaut valide mais trop long : tronque apres validation
        reg.add_filename("F", false, &"f".repeat(300), codes()).unwrap();
        let reg = parsed(reg);
        assert_eq!(reg.get_filename("F").unwrap().0.len(), 127);
    }

    #[test]
    fn test_descriptor_accessors() {
        let mut reg = ParamRegistry::new();
        reg.add_numeric("N", true, 0, 9, 3, codes()).unwrap();
        reg.add_url("U", false, "https://example.com/index.html", EventCodes::none()).unwrap();

        let n = reg.find("N").unwrap();
        assert_eq!(n.kind(), ParamKind::Numeric);
        assert!(n.is_mandatory());
        assert!(!n.is_provisioned());
        assert_eq!(n.events(), &codes());
        assert!(matches!(n.slot(), ParamSlot::Numeric(r) if r.current == 3));

        let u = reg.descriptors().nth(1).unwrap();
        assert!(!u.is_mandatory());
        assert_eq!(u.events(), &EventCodes::none());
        assert!(matches!(u.slot(), ParamSlot::Url(t) if t.current == "https://example.com/index.html"));
    }

    #[test]
    fn test_ipv4_addr() {
        let mut reg = ParamRegistry::new();
        reg.add_ipv4("IP", false, "10.1.2.3", codes()).unwrap();
        reg.add_ipv4("EMPTY", false, "", codes()).unwrap();
        let reg = parsed(reg);
        assert_eq!(reg.get_ipv4_addr("IP").unwrap(), (Some(Ipv4Addr::new(10, 1, 2, 3)), false));
        assert_eq!(reg.get_ipv4_addr("EMPTY").unwrap(), (None, false));
    }
}
