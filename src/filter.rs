//! Response filter and renderer.
//!
//! The three filter options live in one table, [`FILTER_OPTIONS`], which both
//! the picker and the renderer read. Rendering always follows the table
//! order, never the order in which options were picked. The picker lists the
//! same entries in [`PICKER_ORDER`].

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::response::{BfhlResponse, ResponseField};

/// Filter tag selecting one response field.
///
/// Variant order is the render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterTag {
    Numbers,
    Alphabets,
    HighestLowercaseAlphabet,
}

/// One entry of the option table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub tag: FilterTag,
    /// Value carried by the picker control.
    pub value: &'static str,
    /// Label shown in the picker and as the line prefix.
    pub label: &'static str,
    /// Response field the option displays.
    pub field: ResponseField,
}

/// All filter options, in render order.
pub const FILTER_OPTIONS: &[FilterOption] = &[
    FilterOption {
        tag: FilterTag::Numbers,
        value: "numbers",
        label: "Numbers",
        field: ResponseField::Numbers,
    },
    FilterOption {
        tag: FilterTag::Alphabets,
        value: "alphabets",
        label: "Alphabets",
        field: ResponseField::Alphabets,
    },
    FilterOption {
        tag: FilterTag::HighestLowercaseAlphabet,
        value: "highestLowercaseAlphabet",
        label: "Highest Lowercase Alphabet",
        field: ResponseField::HighestLowercaseAlphabet,
    },
];

/// Order in which the picker lists the options. Rendering ignores it.
pub const PICKER_ORDER: &[FilterTag] = &[
    FilterTag::Alphabets,
    FilterTag::Numbers,
    FilterTag::HighestLowercaseAlphabet,
];

/// Options as the picker shows them.
pub fn picker_options() -> impl Iterator<Item = &'static FilterOption> {
    PICKER_ORDER.iter().map(|tag| tag.option())
}

impl FilterTag {
    pub fn option(self) -> &'static FilterOption {
        // Table order matches variant order.
        &FILTER_OPTIONS[self as usize]
    }

    pub fn value(self) -> &'static str {
        self.option().value
    }

    pub fn label(self) -> &'static str {
        self.option().label
    }
}

impl fmt::Display for FilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Error returned when a picker value names no filter option.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter option: {0}")]
pub struct UnknownFilter(pub String);

impl FromStr for FilterTag {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FILTER_OPTIONS
            .iter()
            .find(|opt| opt.value == s)
            .map(|opt| opt.tag)
            .ok_or_else(|| UnknownFilter(s.to_string()))
    }
}

/// The active set of filter tags. Iterates in render order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    tags: BTreeSet<FilterTag>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole selection. Nothing is merged with the previous one.
    pub fn replace<I: IntoIterator<Item = FilterTag>>(&mut self, tags: I) {
        self.tags = tags.into_iter().collect();
    }

    pub fn contains(&self, tag: FilterTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = FilterTag> + '_ {
        self.tags.iter().copied()
    }
}

impl FromIterator<FilterTag> for FilterSelection {
    fn from_iter<I: IntoIterator<Item = FilterTag>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().collect(),
        }
    }
}

/// Rendered summary: one line per selected field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    pub lines: Vec<String>,
}

impl FilteredView {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for FilteredView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Render the selected fields of a response.
///
/// Returns `None` when no response is stored, whatever the selection.
pub fn render(response: Option<&BfhlResponse>, selection: &FilterSelection) -> Option<FilteredView> {
    let response = response?;
    let lines = FILTER_OPTIONS
        .iter()
        .filter(|opt| selection.contains(opt.tag))
        .map(|opt| format!("{}: {}", opt.label, response.field(opt.field)))
        .collect();
    Some(FilteredView { lines })
}
