//! crates/interrogation_core/src/view_state.rs
//!
//! The mutable view configuration: category toggles, sort order, the two
//! participant groups and the related-only flag.

use crate::domain::{ActionCategory, Group};
use std::fmt;
use std::str::FromStr;

/// A mutation that named something the view does not know about.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("Unknown category toggle: {0}")]
    UnknownCategory(String),
    #[error("Unknown participant group: {0}")]
    UnknownGroup(String),
    #[error("Unknown sort order: {0}")]
    UnknownSortOrder(String),
}

//=========================================================================================
// Category Toggles
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    Date,
    Time,
    Me,
    Do,
    Ooc,
    PrivateMessage,
    Commands,
    Unrecognized,
    Radio,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 9] = [
        CategoryKey::Date,
        CategoryKey::Time,
        CategoryKey::Me,
        CategoryKey::Do,
        CategoryKey::Ooc,
        CategoryKey::PrivateMessage,
        CategoryKey::Commands,
        CategoryKey::Unrecognized,
        CategoryKey::Radio,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryKey::Date => "date",
            CategoryKey::Time => "time",
            CategoryKey::Me => "me",
            CategoryKey::Do => "do",
            CategoryKey::Ooc => "ooc",
            CategoryKey::PrivateMessage => "pw",
            CategoryKey::Commands => "commands",
            CategoryKey::Unrecognized => "unrecognized",
            CategoryKey::Radio => "radio",
        }
    }

    /// The toggle that controls lines of a given action category, if any.
    /// In-character chat has no toggle of its own.
    pub fn for_category(category: ActionCategory) -> Option<Self> {
        match category {
            ActionCategory::ChatIc => None,
            ActionCategory::ChatOoc => Some(CategoryKey::Ooc),
            ActionCategory::Me => Some(CategoryKey::Me),
            ActionCategory::Do => Some(CategoryKey::Do),
            ActionCategory::Command => Some(CategoryKey::Commands),
            ActionCategory::PrivateMessage => Some(CategoryKey::PrivateMessage),
            ActionCategory::Unrecognized => Some(CategoryKey::Unrecognized),
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        let wanted = wanted.trim_start_matches('/');
        CategoryKey::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .or(match wanted {
                "hour" => Some(CategoryKey::Time),
                "command" => Some(CategoryKey::Commands),
                _ => None,
            })
            .ok_or_else(|| ViewError::UnknownCategory(s.to_string()))
    }
}

//=========================================================================================
// Sort Order
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// File order.
    #[default]
    Ascending,
    /// File order reversed.
    Descending,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => f.write_str("asc"),
            SortOrder::Descending => f.write_str("desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(ViewError::UnknownSortOrder(s.to_string())),
        }
    }
}

impl FromStr for Group {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" | "i" | "interviewer" => Ok(Group::A),
            "b" | "o" | "interrogated" => Ok(Group::B),
            _ => Err(ViewError::UnknownGroup(s.to_string())),
        }
    }
}

//=========================================================================================
// View State
//=========================================================================================

/// Everything the filter-and-label pipeline needs besides the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    toggles: [bool; CategoryKey::ALL.len()],
    sort_order: SortOrder,
    group_a: Vec<String>,
    group_b: Vec<String>,
    only_related: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            toggles: [true; CategoryKey::ALL.len()],
            sort_order: SortOrder::Ascending,
            group_a: Vec::new(),
            group_b: Vec::new(),
            only_related: false,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self, key: CategoryKey) -> bool {
        self.toggles[key.slot()]
    }

    pub fn set_category_toggle(&mut self, key: CategoryKey, visible: bool) {
        self.toggles[key.slot()] = visible;
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    pub fn only_related(&self) -> bool {
        self.only_related
    }

    pub fn set_only_related(&mut self, only_related: bool) {
        self.only_related = only_related;
    }

    /// Members of a group in selection order.
    pub fn members(&self, group: Group) -> &[String] {
        match group {
            Group::A => &self.group_a,
            Group::B => &self.group_b,
        }
    }

    fn members_mut(&mut self, group: Group) -> &mut Vec<String> {
        match group {
            Group::A => &mut self.group_a,
            Group::B => &mut self.group_b,
        }
    }

    /// Which group a name belongs to, if any.
    pub fn group_of(&self, name: &str) -> Option<Group> {
        if self.group_a.iter().any(|n| n == name) {
            Some(Group::A)
        } else if self.group_b.iter().any(|n| n == name) {
            Some(Group::B)
        } else {
            None
        }
    }

    /// Adds a name to a group, removing it from the other one first.
    /// Re-selecting a member keeps its original position.
    pub fn select(&mut self, group: Group, name: &str) {
        self.members_mut(group.other()).retain(|n| n != name);
        let members = self.members_mut(group);
        if !members.iter().any(|n| n == name) {
            members.push(name.to_string());
        }
    }

    pub fn deselect(&mut self, group: Group, name: &str) {
        self.members_mut(group).retain(|n| n != name);
    }

    pub fn has_selection(&self) -> bool {
        !self.group_a.is_empty() || !self.group_b.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let state = ViewState::new();
        assert!(CategoryKey::ALL.iter().all(|k| state.is_enabled(*k)));
        assert_eq!(state.sort_order(), SortOrder::Ascending);
        assert!(!state.only_related());
        assert!(!state.has_selection());
    }

    #[test]
    fn toggles_are_independent() {
        let mut state = ViewState::new();
        state.set_category_toggle(CategoryKey::Radio, false);
        assert!(!state.is_enabled(CategoryKey::Radio));
        assert!(state.is_enabled(CategoryKey::Unrecognized));
        state.set_category_toggle(CategoryKey::Radio, true);
        assert!(state.is_enabled(CategoryKey::Radio));
    }

    #[test]
    fn key_parsing() {
        assert_eq!("radio".parse::<CategoryKey>(), Ok(CategoryKey::Radio));
        assert_eq!("/me".parse::<CategoryKey>(), Ok(CategoryKey::Me));
        assert_eq!("OOC".parse::<CategoryKey>(), Ok(CategoryKey::Ooc));
        assert_eq!("hour".parse::<CategoryKey>(), Ok(CategoryKey::Time));
        assert_eq!(
            "weather".parse::<CategoryKey>(),
            Err(ViewError::UnknownCategory("weather".to_string()))
        );
        for key in CategoryKey::ALL {
            assert_eq!(key.as_str().parse::<CategoryKey>(), Ok(key));
        }
    }

    #[test]
    fn selection_order_is_kept() {
        let mut state = ViewState::new();
        state.select(Group::A, "Zofia Lis");
        state.select(Group::A, "Adam Kot");
        state.select(Group::A, "Zofia Lis");
        assert_eq!(state.members(Group::A), ["Zofia Lis", "Adam Kot"]);
        state.deselect(Group::A, "Zofia Lis");
        assert_eq!(state.members(Group::A), ["Adam Kot"]);
    }

    #[test]
    fn groups_are_mutually_exclusive() {
        let mut state = ViewState::new();
        let steps = [
            (Group::A, "John Doe", true),
            (Group::B, "John Doe", true),
            (Group::B, "Jane Roe", true),
            (Group::A, "Jane Roe", true),
            (Group::A, "John Doe", true),
            (Group::A, "John Doe", false),
            (Group::B, "John Doe", true),
        ];
        for (group, name, select) in steps {
            if select {
                state.select(group, name);
            } else {
                state.deselect(group, name);
            }
            for name in state.members(Group::A) {
                assert!(!state.members(Group::B).contains(name));
            }
        }
        assert_eq!(state.group_of("John Doe"), Some(Group::B));
        assert_eq!(state.group_of("Jane Roe"), Some(Group::A));
    }
}
