//! Namespaced identifiers for cooldown entries.
//!
//! A [`NamespacedKey`] names one entry inside a data holder's attribute store.
//! The namespace usually identifies the owning plugin or subsystem and the
//! name identifies the cooldown within it, e.g. `plugin:fireball_cooldown`.

use core::fmt;
use core::str::FromStr;
use heapless::String;

/// Maximum length of the `namespace:name` form, in bytes.
pub const MAX_KEY_LEN: usize = 255;

/// An immutable `namespace:name` identifier.
///
/// Stored inline without allocation. Two keys compare equal exactly when
/// their namespaces and names match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamespacedKey {
    full: String<MAX_KEY_LEN>,
    separator: usize,
}

impl NamespacedKey {
    /// Creates a key from a namespace and a name.
    ///
    /// # Errors
    /// * `EmptyNamespace` / `EmptyName` - A component is empty
    /// * `InvalidNamespaceChar` - Namespace contains a char outside `[a-z0-9._-]`
    /// * `InvalidNameChar` - Name contains a char outside `[a-z0-9/._-]`
    /// * `TooLong` - The combined form exceeds [`MAX_KEY_LEN`]
    pub fn new(namespace: &str, name: &str) -> Result<Self, KeyError> {
        if namespace.is_empty() {
            return Err(KeyError::EmptyNamespace);
        }
        if name.is_empty() {
            return Err(KeyError::EmptyName);
        }
        if let Some(c) = namespace.chars().find(|c| !is_namespace_char(*c)) {
            return Err(KeyError::InvalidNamespaceChar(c));
        }
        if let Some(c) = name.chars().find(|c| !is_name_char(*c)) {
            return Err(KeyError::InvalidNameChar(c));
        }

        let mut full = String::<MAX_KEY_LEN>::new();
        full.push_str(namespace).map_err(|_| KeyError::TooLong)?;
        full.push(':').map_err(|_| KeyError::TooLong)?;
        full.push_str(name).map_err(|_| KeyError::TooLong)?;

        Ok(Self {
            full,
            separator: namespace.len(),
        })
    }

    /// Parses a key from its `namespace:name` form.
    ///
    /// Splits on the first `:`. Everything after it must be a valid name.
    pub fn parse(key: &str) -> Result<Self, KeyError> {
        match key.split_once(':') {
            Some((namespace, name)) => Self::new(namespace, name),
            None => Err(KeyError::MissingSeparator),
        }
    }

    /// Returns the namespace component.
    pub fn namespace(&self) -> &str {
        &self.as_str()[..self.separator]
    }

    /// Returns the name component.
    pub fn name(&self) -> &str {
        &self.as_str()[self.separator + 1..]
    }

    /// Returns the full `namespace:name` form.
    pub fn as_str(&self) -> &str {
        self.full.as_str()
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '.' | '_' | '-')
}

fn is_name_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl fmt::Display for NamespacedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamespacedKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for NamespacedKey {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str());
    }
}

/// Key validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyError {
    /// Namespace is empty.
    EmptyNamespace,

    /// Name is empty.
    EmptyName,

    /// Namespace contains a disallowed character.
    InvalidNamespaceChar(char),

    /// Name contains a disallowed character.
    InvalidNameChar(char),

    /// No `:` between namespace and name.
    MissingSeparator,

    /// Combined key exceeds [`MAX_KEY_LEN`].
    TooLong,
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::EmptyNamespace => write!(f, "namespace must not be empty"),
            KeyError::EmptyName => write!(f, "name must not be empty"),
            KeyError::InvalidNamespaceChar(c) => {
                write!(f, "invalid character {:?} in namespace (allowed: a-z 0-9 . _ -)", c)
            }
            KeyError::InvalidNameChar(c) => {
                write!(f, "invalid character {:?} in name (allowed: a-z 0-9 / . _ -)", c)
            }
            KeyError::MissingSeparator => {
                write!(f, "key must have the form namespace:name")
            }
            KeyError::TooLong => {
                write!(f, "key exceeds {} bytes", MAX_KEY_LEN)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KeyError {}
