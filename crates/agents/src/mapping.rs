//! Vocabulary translation between the canonical model and native formats.
//!
//! Each adapter owns one [`MappingTable`] per translated vocabulary (tool
//! names, model ids). Tables are declared as `(canonical, native)` pairs;
//! the reverse direction is derived from the same pairs when the table is
//! built, so the two directions cannot drift apart.
//!
//! Values missing from a table are never dropped. Going out they are
//! emitted per the table's [`UnknownCase`] policy, coming back they are
//! kept exactly as read.
//!
//! Several canonical values may share one native value (`Bash` and
//! `WebFetch` both become `shell` for agentkit). When reading such a value
//! back, the pair listed **first** in the table wins.

use std::collections::{HashMap, HashSet};

/// How a canonical value absent from the table is written natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownCase {
    /// Lower-case it (native tool vocabularies are lower-case).
    Lowercase,
    /// Keep it verbatim.
    Preserve,
}

/// Result of a table lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mapped<'a> {
    /// Present in the table.
    Known(&'a str),
    /// Absent; carries the fallback value.
    Unmapped(String),
}

impl Mapped<'_> {
    pub fn into_string(self) -> String {
        match self {
            Mapped::Known(s) => s.to_string(),
            Mapped::Unmapped(s) => s,
        }
    }
}

/// Bidirectional mapping built from one `(canonical, native)` list.
#[derive(Debug, Clone)]
pub struct MappingTable {
    forward: HashMap<&'static str, &'static str>,
    reverse: HashMap<&'static str, &'static str>,
    unknown: UnknownCase,
}

impl MappingTable {
    /// Builds both directions from `entries`.
    ///
    /// Canonical keys are expected to be unique; if one repeats, its first
    /// pair is used, matching the reverse tie-break.
    pub fn new(entries: &'static [(&'static str, &'static str)], unknown: UnknownCase) -> Self {
        let mut forward = HashMap::with_capacity(entries.len());
        for &(canonical, native) in entries {
            forward.entry(canonical).or_insert(native);
        }
        Self {
            forward,
            reverse: invert(entries),
            unknown,
        }
    }

    /// A table with no entries that keeps every value verbatim.
    pub fn identity() -> Self {
        Self::new(&[], UnknownCase::Preserve)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Canonical → native.
    pub fn lookup(&self, canonical: &str) -> Mapped<'static> {
        match self.forward.get(canonical) {
            Some(native) => Mapped::Known(native),
            None => Mapped::Unmapped(match self.unknown {
                UnknownCase::Lowercase => canonical.to_lowercase(),
                UnknownCase::Preserve => canonical.to_string(),
            }),
        }
    }

    /// Native → canonical. Unknown values come back unchanged.
    pub fn reverse_lookup(&self, native: &str) -> Mapped<'static> {
        match self.reverse.get(native) {
            Some(canonical) => Mapped::Known(canonical),
            None => Mapped::Unmapped(native.to_string()),
        }
    }

    pub fn to_native(&self, canonical: &str) -> String {
        self.lookup(canonical).into_string()
    }

    pub fn to_canonical(&self, native: &str) -> String {
        self.reverse_lookup(native).into_string()
    }

    /// Translates a collection to native values, collapsing duplicates.
    pub fn to_native_all<'a, I>(&self, values: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        dedup(values.into_iter().map(|v| self.to_native(v)))
    }

    /// Translates a collection back to canonical values, collapsing duplicates.
    pub fn to_canonical_all<'a, I>(&self, values: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        dedup(values.into_iter().map(|v| self.to_canonical(v)))
    }
}

/// Derives the native → canonical direction; the first pair for a native value wins.
pub fn invert(
    entries: &'static [(&'static str, &'static str)],
) -> HashMap<&'static str, &'static str> {
    let mut reverse = HashMap::with_capacity(entries.len());
    for &(canonical, native) in entries {
        reverse.entry(native).or_insert(canonical);
    }
    reverse
}

/// Removes repeats, keeping first-seen order.
fn dedup(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(v.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    static TOOLS: &[(&str, &str)] = &[
        ("Bash", "shell"),
        ("Read", "read"),
        ("Write", "write"),
        ("Edit", "write"),
        ("WebFetch", "shell"),
    ];

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn known_values_map_both_ways() {
        let table = MappingTable::new(TOOLS, UnknownCase::Lowercase);
        assert_eq!(table.lookup("Read"), Mapped::Known("read"));
        assert_eq!(table.reverse_lookup("read"), Mapped::Known("Read"));
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn reverse_collision_keeps_first_pair() {
        let table = MappingTable::new(TOOLS, UnknownCase::Lowercase);
        assert_eq!(table.to_canonical("shell"), "Bash");
        assert_eq!(table.to_canonical("write"), "Write");
    }

    #[test]
    fn unknown_values_are_lowercased_going_out() {
        let table = MappingTable::new(TOOLS, UnknownCase::Lowercase);
        assert_eq!(
            table.lookup("CustomTool"),
            Mapped::Unmapped("customtool".into())
        );
    }

    #[test]
    fn unknown_values_are_unchanged_coming_back() {
        let table = MappingTable::new(TOOLS, UnknownCase::Lowercase);
        assert_eq!(table.to_canonical("MixedCase"), "MixedCase");
    }

    #[test]
    fn preserve_policy_keeps_case() {
        let table = MappingTable::new(TOOLS, UnknownCase::Preserve);
        assert_eq!(table.to_native("CustomTool"), "CustomTool");
    }

    #[test]
    fn many_to_one_collapses_to_single_entry() {
        let table = MappingTable::new(TOOLS, UnknownCase::Lowercase);
        let out = table.to_native_all(&strings(&["Bash", "Read", "WebFetch", "Edit", "Write"]));
        assert_eq!(out, vec!["shell", "read", "write"]);
    }

    #[test]
    fn unknown_and_known_collision_collapses() {
        // An unknown "SHELL" lower-cases onto the mapped "shell".
        let table = MappingTable::new(TOOLS, UnknownCase::Lowercase);
        let out = table.to_native_all(&strings(&["Bash", "SHELL"]));
        assert_eq!(out, vec!["shell"]);
    }

    #[test]
    fn identity_table_passes_everything_through() {
        let table = MappingTable::identity();
        assert!(table.is_empty());
        assert_eq!(table.to_native("Read"), "Read");
        assert_eq!(table.to_canonical("Read"), "Read");
        assert_eq!(table.to_native_all(&strings(&["A", "B", "A"])), vec!["A", "B"]);
    }

    #[test]
    fn invert_keeps_first_source() {
        let reverse = invert(TOOLS);
        assert_eq!(reverse.len(), 3);
        assert_eq!(reverse["shell"], "Bash");
        assert_eq!(reverse["write"], "Write");
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    static TOOLS: &[(&str, &str)] = &[
        ("Bash", "shell"),
        ("Task", "shell"),
        ("Read", "read"),
        ("Grep", "grep"),
    ];

    proptest! {
        /// Output never contains the same value twice.
        #[test]
        fn native_output_has_no_duplicates(values in prop::collection::vec("[A-Za-z]{1,8}", 0..12)) {
            let table = MappingTable::new(TOOLS, UnknownCase::Lowercase);
            let out = table.to_native_all(&values);
            let unique: HashSet<_> = out.iter().collect();
            prop_assert_eq!(unique.len(), out.len());
        }

        /// Every input value is represented in the output.
        #[test]
        fn nothing_is_dropped(values in prop::collection::vec("[A-Za-z]{1,8}", 0..12)) {
            let table = MappingTable::new(TOOLS, UnknownCase::Lowercase);
            let out = table.to_native_all(&values);
            for v in &values {
                prop_assert!(out.contains(&table.to_native(v)));
            }
        }

        /// Translating the same input twice yields identical output.
        #[test]
        fn translation_is_deterministic(values in prop::collection::vec("[A-Za-z]{1,8}", 0..12)) {
            let table = MappingTable::new(TOOLS, UnknownCase::Lowercase);
            prop_assert_eq!(table.to_native_all(&values), table.to_native_all(&values));
        }
    }
}
