//! Channel permission levels and name-list prefix parsing.
//!
//! Name-list replies decorate nicknames with permission prefix symbols
//! (`@alice`, `+bob`, `~&carol`). This module maps those symbols to an
//! ordered permission enumeration and parses decorated entries.

use std::collections::BTreeSet;

/// A channel permission level.
///
/// Ordering follows declaration order: `Voice < HalfOp < Op < Admin <
/// Owner`. The ordering matters for the implicit-op promotion rule in
/// [`NamesPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Permission {
    /// `+` — may speak in moderated channels.
    Voice,
    /// `%` — half operator.
    HalfOp,
    /// `@` — channel operator.
    Op,
    /// `&` — channel admin (protected operator).
    Admin,
    /// `~` — channel owner (founder).
    Owner,
}

impl Permission {
    /// Map a name-list prefix symbol to its permission level.
    pub fn from_symbol(c: char) -> Option<Permission> {
        match c {
            '+' => Some(Permission::Voice),
            '%' => Some(Permission::HalfOp),
            '@' => Some(Permission::Op),
            '&' => Some(Permission::Admin),
            '~' => Some(Permission::Owner),
            _ => None,
        }
    }

    /// The prefix symbol for this level.
    pub fn symbol(self) -> char {
        match self {
            Permission::Voice => '+',
            Permission::HalfOp => '%',
            Permission::Op => '@',
            Permission::Admin => '&',
            Permission::Owner => '~',
        }
    }
}

/// Policy knobs for name-list parsing.
///
/// `implicit_op` enables the promotion rule inherited from the original
/// deployment: any level above [`Permission::Op`] also grants op itself,
/// even when the server did not repeat the `@` symbol. Strict IRC servers
/// do not guarantee that relationship, so it is policy, not protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamesPolicy {
    /// Whether ranks above op imply op.
    pub implicit_op: bool,
}

impl Default for NamesPolicy {
    fn default() -> Self {
        NamesPolicy { implicit_op: true }
    }
}

/// Parse one decorated name-list entry into its nickname and the set of
/// permission levels held.
///
/// Leading prefix symbols (zero or more) are stripped and accumulated.
/// Returns `None` for entries that are all symbols and no nickname.
pub fn parse_decorated(entry: &str, policy: NamesPolicy) -> Option<(&str, BTreeSet<Permission>)> {
    let mut levels = BTreeSet::new();
    let mut rest = entry;

    while let Some(c) = rest.chars().next() {
        match Permission::from_symbol(c) {
            Some(level) => {
                levels.insert(level);
                rest = &rest[c.len_utf8()..];
            }
            None => break,
        }
    }

    if rest.is_empty() {
        return None;
    }

    if policy.implicit_op && levels.iter().any(|&l| l > Permission::Op) {
        levels.insert(Permission::Op);
    }

    Some((rest, levels))
}
