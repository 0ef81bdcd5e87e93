//! Budgeted, priority-ordered name composition.
//!
//! Components compete for a fixed length budget in the order given by a
//! precedence list. A component is either admitted whole or dropped; it is
//! never truncated. Where an admitted component lands depends on when it was
//! admitted: the slug and each prefix go to the front of the name built so
//! far, while the name, the random suffix and each suffix go to the back.
//! Prefixes are offered last to first, so they keep their caller-given order.
//!
//! With [`DEFAULT_PRECEDENCE`] and every component fitting this yields:
//!
//! ```text
//! prefixes.. slug name random suffixes..
//! ```
//!
//! A different precedence list can produce a different order. Listing
//! `suffixes, random, name` gives `sfx-rd-name`, because each is appended
//! as it is admitted.
//!
//! # Invariants
//!
//! - The composed name never exceeds `max_length` characters
//! - Prefixes and suffixes keep their caller-given relative order
//! - A dropped component never stops later components from being tried

use std::collections::VecDeque;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NamingError;

/// A kind of name component named in a precedence list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    /// The caller's base name.
    Name,
    /// The resource type's slug.
    Slug,
    /// The random suffix.
    Random,
    /// All suffixes, first to last.
    Suffixes,
    /// All prefixes, last to first.
    Prefixes,
}

impl Component {
    /// Tag used for this component in precedence lists.
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Name => "name",
            Component::Slug => "slug",
            Component::Random => "random",
            Component::Suffixes => "suffixes",
            Component::Prefixes => "prefixes",
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Component {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Component::Name),
            "slug" => Ok(Component::Slug),
            "random" => Ok(Component::Random),
            "suffixes" => Ok(Component::Suffixes),
            "prefixes" => Ok(Component::Prefixes),
            other => Err(NamingError::UnknownComponent(other.to_string())),
        }
    }
}

/// Precedence used when the caller does not supply one.
pub const DEFAULT_PRECEDENCE: [Component; 5] = [
    Component::Name,
    Component::Slug,
    Component::Random,
    Component::Suffixes,
    Component::Prefixes,
];

/// Parses a precedence list from its string tags.
pub fn parse_precedence<S: AsRef<str>>(tags: &[S]) -> Result<Vec<Component>, NamingError> {
    tags.iter().map(|t| t.as_ref().parse()).collect()
}

/// Inputs to a single composition.
#[derive(Debug, Clone, Copy)]
pub struct Composition<'a> {
    /// Joins admitted components.
    pub separator: &'a str,
    /// Prefixes in output order.
    pub prefixes: &'a [String],
    /// Base name.
    pub name: &'a str,
    /// Resource type slug (empty to omit).
    pub slug: &'a str,
    /// Suffixes in output order.
    pub suffixes: &'a [String],
    /// Random suffix (empty to omit).
    pub random: &'a str,
    /// Length budget, in characters.
    pub max_length: usize,
    /// Order in which components are offered the budget.
    pub precedence: &'a [Component],
}

impl Composition<'_> {
    /// Assembles the name.
    pub fn compose(&self) -> String {
        let mut packer = Packer::new(self.separator, self.max_length);
        let mut prefixes = self.prefixes;
        let mut suffixes = self.suffixes;

        for component in self.precedence {
            match component {
                Component::Name => {
                    packer.offer(self.name, Placement::Back);
                }
                Component::Slug => {
                    packer.offer(self.slug, Placement::Front);
                }
                Component::Random => {
                    packer.offer(self.random, Placement::Back);
                }
                Component::Suffixes => {
                    while let Some((first, rest)) = suffixes.split_first() {
                        packer.offer(first, Placement::Back);
                        suffixes = rest;
                    }
                }
                Component::Prefixes => {
                    while let Some((last, rest)) = prefixes.split_last() {
                        packer.offer(last, Placement::Front);
                        prefixes = rest;
                    }
                }
            }
        }

        packer.finish()
    }
}

/// Where an admitted component is placed.
#[derive(Debug, Clone, Copy)]
enum Placement {
    Front,
    Back,
}

/// Accumulates admitted components against the budget.
struct Packer<'a> {
    separator: &'a str,
    separator_len: usize,
    max_length: usize,
    current_length: usize,
    contents: VecDeque<&'a str>,
}

impl<'a> Packer<'a> {
    fn new(separator: &'a str, max_length: usize) -> Self {
        Self {
            separator,
            separator_len: separator.chars().count(),
            max_length,
            current_length: 0,
            contents: VecDeque::new(),
        }
    }

    /// Admits `part` if it is non-empty and fits.
    fn offer(&mut self, part: &'a str, placement: Placement) {
        if part.is_empty() {
            return;
        }

        let joint = if self.contents.is_empty() {
            0
        } else {
            self.separator_len
        };
        let needed = self.current_length + part.chars().count() + joint;
        if needed > self.max_length {
            return;
        }

        match placement {
            Placement::Front => self.contents.push_front(part),
            Placement::Back => self.contents.push_back(part),
        }
        self.current_length = needed;
    }

    fn finish(self) -> String {
        let parts: Vec<&str> = self.contents.into();
        parts.join(self.separator)
    }
}
