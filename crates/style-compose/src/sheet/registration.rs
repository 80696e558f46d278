//! Registering a style sheet against a [`Registry`].
//!
//! # Registration order
//!
//! Entries are registered by category, always in [`Category::ORDER`]:
//!
//! | Category | Registry call | Identifier kept |
//! |----------|---------------|-----------------|
//! | keyframes | `register_keyframes` | yes |
//! | hash rules | `register_hash_rule` | yes |
//! | styles | `register_style` | yes |
//! | rules | `register_rule` | no |
//! | css | `register_css` | no |
//!
//! Within a category, entries follow declaration order.
//!
//! # Eager and lazy registration
//!
//! Every keyframes, hash rule and style entry is a memoized cell that is
//! pending until forced and resolved exactly once. [`Mode::Eager`] forces
//! all of them during [`register_style_sheet`]; a deferred style reading an
//! entry that has not been reached yet gets [`SheetError::Unavailable`].
//!
//! [`Mode::Lazy`] forces an entry the first time its identifier is read,
//! either through [`Registration`] or from inside another deferred style.
//! Entries that are never read never reach the registry. Rules and global
//! CSS have no identifier to read and are always registered during the call.

use std::borrow::Cow;
use std::cell::Cell;

use indexmap::IndexMap;
use once_cell::unsync::OnceCell;
use tracing::{debug, debug_span, trace};

use super::error::SheetError;
use super::options::{Mode, RegistrationOptions};
use super::registry::{Category, Registry};
use super::value::{StyleSheet, StyleValue};
use crate::style::Style;

/// Logical name to generated identifier.
pub type IdentifierMap = IndexMap<String, String>;

/// How an entry is handed to the registry.
#[derive(Debug, Clone, Copy)]
enum Target<'a> {
    Keyframes,
    HashRule { prefix: &'a str },
    Style,
}

impl Target<'_> {
    fn category(self) -> Category {
        match self {
            Target::Keyframes => Category::Keyframes,
            Target::HashRule { .. } => Category::HashRules,
            Target::Style => Category::Styles,
        }
    }
}

struct Entry<'a> {
    value: &'a StyleValue,
    target: Target<'a>,
    id: OnceCell<String>,
    forcing: Cell<bool>,
}

impl<'a> Entry<'a> {
    fn new(value: &'a StyleValue, target: Target<'a>) -> Self {
        Self {
            value,
            target,
            id: OnceCell::new(),
            forcing: Cell::new(false),
        }
    }
}

type Table<'a> = IndexMap<&'a str, Entry<'a>>;

/// Lookup seam between deferred styles and the registration driving them.
trait Resolve {
    fn lookup(&self, category: Category, name: &str) -> Result<String, SheetError>;
}

/// Read-only view of the identifiers available to a deferred style.
///
/// Under eager registration the view only contains entries registered
/// before the one being computed. Under lazy registration any lookup of a
/// pending entry registers it first.
pub struct Refs<'r> {
    resolver: &'r dyn Resolve,
}

impl Refs<'_> {
    /// Identifier of a sheet entry.
    ///
    /// # Errors
    ///
    /// [`SheetError::UnknownEntry`] if the sheet has no such entry,
    /// [`SheetError::Unavailable`] if it is not registered yet, and
    /// [`SheetError::Cycle`] or [`SheetError::Registry`] if registering it
    /// lazily failed.
    pub fn style(&self, name: &str) -> Result<String, SheetError> {
        self.resolver.lookup(Category::Styles, name)
    }

    /// Identifier of a keyframes entry. Fails like [`Refs::style`].
    pub fn keyframes(&self, name: &str) -> Result<String, SheetError> {
        self.resolver.lookup(Category::Keyframes, name)
    }

    /// Identifier of a hash rule entry. Fails like [`Refs::style`].
    pub fn hash_rule(&self, name: &str) -> Result<String, SheetError> {
        self.resolver.lookup(Category::HashRules, name)
    }
}

impl std::fmt::Debug for Refs<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Refs").finish_non_exhaustive()
    }
}

/// The identifiers produced by one [`register_style_sheet`] call.
///
/// Borrows the registry and the sheet description for as long as lazy
/// entries may still be registered.
pub struct Registration<'a, R: Registry> {
    registry: &'a R,
    mode: Mode,
    scope: Option<&'a str>,
    keyframes: Table<'a>,
    hash_rules: Table<'a>,
    styles: Table<'a>,
}

impl<'a, R: Registry> Registration<'a, R> {
    fn new(
        registry: &'a R,
        sheet: &'a StyleSheet,
        options: &'a RegistrationOptions,
        scope: Option<&'a str>,
    ) -> Self {
        let keyframes = options
            .keyframes
            .iter()
            .map(|(name, value)| (name.as_str(), Entry::new(value, Target::Keyframes)))
            .collect();
        let hash_rules = options
            .hash_rules
            .iter()
            .map(|(name, rule)| {
                let target = Target::HashRule {
                    prefix: rule.prefix.as_str(),
                };
                (name.as_str(), Entry::new(&rule.value, target))
            })
            .collect();
        let styles = sheet
            .iter()
            .map(|(name, value)| (name, Entry::new(value, Target::Style)))
            .collect();

        Self {
            registry,
            mode: options.mode,
            scope,
            keyframes,
            hash_rules,
            styles,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The name prefix applied to style and hash rule display names.
    pub fn scope(&self) -> Option<&'a str> {
        self.scope
    }

    /// Generated class name of a sheet entry, registering it first under
    /// lazy registration.
    ///
    /// # Errors
    ///
    /// [`SheetError::UnknownEntry`] for a name the sheet doesn't define;
    /// lazily registering the entry may fail with any other variant.
    pub fn style(&self, name: &str) -> Result<String, SheetError> {
        self.get(Category::Styles, name)
    }

    /// Generated name of a keyframes entry. Fails like [`Registration::style`].
    pub fn keyframes(&self, name: &str) -> Result<String, SheetError> {
        self.get(Category::Keyframes, name)
    }

    /// Generated identifier of a hash rule entry. Fails like [`Registration::style`].
    pub fn hash_rule(&self, name: &str) -> Result<String, SheetError> {
        self.get(Category::HashRules, name)
    }

    /// Generated identifier of any named entry.
    ///
    /// # Errors
    ///
    /// Rules and global CSS have no identifiers and always report
    /// [`SheetError::UnknownEntry`].
    pub fn get(&self, category: Category, name: &str) -> Result<String, SheetError> {
        self.resolve(category, name, self.mode == Mode::Lazy)
    }

    /// Returns `true` once the entry has reached the registry. Never forces.
    pub fn is_registered(&self, category: Category, name: &str) -> bool {
        self.table(category)
            .and_then(|table| table.get(name))
            .is_some_and(|entry| entry.id.get().is_some())
    }

    /// Logical names of a category in declaration order. Never forces.
    pub fn names(&self, category: Category) -> impl Iterator<Item = &'a str> + '_ {
        self.table(category)
            .into_iter()
            .flat_map(|table| table.keys().copied())
    }

    pub fn style_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.names(Category::Styles)
    }

    /// Forces every sheet entry, in declaration order, and returns the map.
    ///
    /// # Errors
    ///
    /// Stops at the first entry that fails to register.
    pub fn resolve_styles(&self) -> Result<IdentifierMap, SheetError> {
        self.resolve_all(Category::Styles)
    }

    /// Forces every keyframes entry. Fails like [`Registration::resolve_styles`].
    pub fn resolve_keyframes(&self) -> Result<IdentifierMap, SheetError> {
        self.resolve_all(Category::Keyframes)
    }

    /// Forces every hash rule entry. Fails like [`Registration::resolve_styles`].
    pub fn resolve_hash_rules(&self) -> Result<IdentifierMap, SheetError> {
        self.resolve_all(Category::HashRules)
    }

    fn resolve_all(&self, category: Category) -> Result<IdentifierMap, SheetError> {
        let mut map = IdentifierMap::new();
        for name in self.names(category) {
            let id = self.resolve(category, name, true)?;
            map.insert(name.to_string(), id);
        }
        Ok(map)
    }

    fn table(&self, category: Category) -> Option<&Table<'a>> {
        match category {
            Category::Keyframes => Some(&self.keyframes),
            Category::HashRules => Some(&self.hash_rules),
            Category::Styles => Some(&self.styles),
            Category::Rules | Category::Css => None,
        }
    }

    fn resolve(&self, category: Category, name: &str, force: bool) -> Result<String, SheetError> {
        let entry = self
            .table(category)
            .and_then(|table| table.get(name))
            .ok_or_else(|| SheetError::UnknownEntry {
                category,
                name: name.to_string(),
            })?;

        if let Some(id) = entry.id.get() {
            trace!(%category, name, id = %id, "using registered identifier");
            return Ok(id.clone());
        }
        if !force {
            return Err(SheetError::Unavailable {
                category,
                name: name.to_string(),
            });
        }
        if entry.forcing.replace(true) {
            return Err(SheetError::Cycle {
                category,
                name: name.to_string(),
            });
        }

        trace!(%category, name, "forcing entry");
        let result = self.register_entry(name, entry);
        entry.forcing.set(false);

        // A failed entry stays pending and may be retried by a later read.
        let id = result?;
        Ok(entry.id.get_or_init(|| id).clone())
    }

    fn register_entry(&self, name: &str, entry: &Entry<'a>) -> Result<String, SheetError> {
        let category = entry.target.category();
        let style = self.evaluate(entry.value)?;

        let registered = match entry.target {
            Target::Keyframes => self.registry.register_keyframes(&style, Some(name)),
            Target::HashRule { prefix } => {
                let display_name = self.display_name(name);
                self.registry
                    .register_hash_rule(prefix, &style, Some(display_name.as_ref()))
            }
            Target::Style => {
                let display_name = self.display_name(name);
                self.registry.register_style(&style, Some(display_name.as_ref()))
            }
        };

        let id = registered.map_err(|e| SheetError::registry(category, Some(name), e))?;
        debug!(%category, name, id = %id, "registered");
        Ok(id)
    }

    fn display_name<'n>(&self, name: &'n str) -> Cow<'n, str> {
        match self.scope {
            Some(scope) => Cow::Owned(format!("{}_{}", scope, name)),
            None => Cow::Borrowed(name),
        }
    }

    fn evaluate<'v>(&self, value: &'v StyleValue) -> Result<Cow<'v, Style>, SheetError> {
        match value {
            StyleValue::Literal(style) => Ok(Cow::Borrowed(style)),
            StyleValue::Deferred(compute) => {
                let refs = Refs { resolver: self };
                compute(&refs).map(Cow::Owned)
            }
        }
    }

    fn force_all(&self, category: Category) -> Result<(), SheetError> {
        for name in self.names(category) {
            self.resolve(category, name, true)?;
        }
        Ok(())
    }
}

impl<R: Registry> Resolve for Registration<'_, R> {
    fn lookup(&self, category: Category, name: &str) -> Result<String, SheetError> {
        self.get(category, name)
    }
}

impl<R: Registry> std::fmt::Debug for Registration<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registered = |table: &Table<'_>| -> IndexMap<String, Option<String>> {
            table
                .iter()
                .map(|(name, entry)| (name.to_string(), entry.id.get().cloned()))
                .collect()
        };

        f.debug_struct("Registration")
            .field("mode", &self.mode)
            .field("scope", &self.scope)
            .field("keyframes", &registered(&self.keyframes))
            .field("hash_rules", &registered(&self.hash_rules))
            .field("styles", &registered(&self.styles))
            .finish()
    }
}

/// Registers a style sheet and its companion collections.
///
/// With `scope` set, style and hash rule display names are prefixed with
/// `<scope>_`; keyframes names are global and never prefixed.
///
/// # Errors
///
/// Returns the first failure: a deferred style that returned an error, or
/// a registry call that failed. Entries registered before the failure stay
/// registered in the registry.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::convert::Infallible;
/// use style_compose::{register_style_sheet, Registry, RegistrationOptions, Style, StyleSheet};
///
/// #[derive(Default)]
/// struct Counter(RefCell<usize>);
///
/// impl Counter {
///     fn next(&self, name: Option<&str>) -> String {
///         *self.0.borrow_mut() += 1;
///         format!("{}_{}", name.unwrap_or("x"), self.0.borrow())
///     }
/// }
///
/// impl Registry for Counter {
///     type Error = Infallible;
///
///     fn register_style(&self, _: &Style, name: Option<&str>) -> Result<String, Infallible> {
///         Ok(self.next(name))
///     }
///     fn register_keyframes(&self, _: &Style, name: Option<&str>) -> Result<String, Infallible> {
///         Ok(self.next(name))
///     }
///     fn register_hash_rule(&self, _: &str, _: &Style, name: Option<&str>) -> Result<String, Infallible> {
///         Ok(self.next(name))
///     }
///     fn register_rule(&self, _: &str, _: &Style) -> Result<(), Infallible> {
///         Ok(())
///     }
///     fn register_css(&self, _: &Style) -> Result<(), Infallible> {
///         Ok(())
///     }
/// }
///
/// let registry = Counter::default();
/// let sheet = StyleSheet::new().add("button", Style::new().set("color", "red"));
/// let options = RegistrationOptions::new();
///
/// let registration = register_style_sheet(&registry, &sheet, &options, Some("app")).unwrap();
/// assert_eq!(registration.style("button").unwrap(), "app_button_1");
/// ```
pub fn register_style_sheet<'a, R: Registry>(
    registry: &'a R,
    sheet: &'a StyleSheet,
    options: &'a RegistrationOptions,
    scope: Option<&'a str>,
) -> Result<Registration<'a, R>, SheetError> {
    let span = debug_span!("register_style_sheet", mode = ?options.mode, scope);
    let _guard = span.enter();

    let registration = Registration::new(registry, sheet, options, scope);

    if registration.mode == Mode::Eager {
        registration.force_all(Category::Keyframes)?;
        registration.force_all(Category::HashRules)?;
        registration.force_all(Category::Styles)?;
    }

    for (selector, value) in &options.rules {
        let style = registration.evaluate(value)?;
        registry
            .register_rule(selector, &style)
            .map_err(|e| SheetError::registry(Category::Rules, Some(selector.as_str()), e))?;
        debug!(category = %Category::Rules, selector = selector.as_str(), "registered");
    }

    if let Some(css) = &options.css {
        let style = registration.evaluate(css)?;
        registry
            .register_css(&style)
            .map_err(|e| SheetError::registry(Category::Css, None, e))?;
        debug!(category = %Category::Css, "registered");
    }

    Ok(registration)
}
