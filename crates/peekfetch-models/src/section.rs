//! Section types.
//!
//! A section is one collapsible block of the dashboard. Its body is either
//! flat key/value pairs or a list of grouped items, and that shape is fixed
//! when the section is built.

use crate::fields::Fields;

/// The metric domain a section belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Host, OS and session facts.
    System,
    /// Processor details and usage.
    Cpu,
    /// RAM and swap.
    Memory,
    /// Mounted filesystems.
    Disk,
    /// Network interfaces and counters.
    Network,
}

impl SectionKind {
    /// All kinds in dashboard order.
    pub const ALL: [SectionKind; 5] = [
        SectionKind::System,
        SectionKind::Cpu,
        SectionKind::Memory,
        SectionKind::Disk,
        SectionKind::Network,
    ];

    /// Display title. Also the section's stable identity.
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::System => "System",
            SectionKind::Cpu => "CPU",
            SectionKind::Memory => "Memory",
            SectionKind::Disk => "Disk",
            SectionKind::Network => "Network",
        }
    }

    /// Icon shown before the title.
    pub fn icon(self) -> &'static str {
        match self {
            SectionKind::System => "🖥",
            SectionKind::Cpu => "⚡",
            SectionKind::Memory => "💾",
            SectionKind::Disk => "💿",
            SectionKind::Network => "🌐",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// One grouped entity inside a tree section (a partition, an interface).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeItem {
    /// Item header.
    pub name: String,
    /// Child key/value pairs in display order.
    pub children: Fields,
}

impl TreeItem {
    /// Creates a tree item.
    pub fn new(name: impl Into<String>, children: Fields) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }
}

/// Section content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    /// Key/value pairs.
    Flat(Fields),
    /// Grouped items, each with its own key/value pairs.
    Tree(Vec<TreeItem>),
}

/// A named, collapsible block of related metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Metric domain; determines title and icon.
    pub kind: SectionKind,
    /// Whether the section is expanded.
    pub expanded: bool,
    /// Whether the live refresh re-queries this section.
    pub live: bool,
    body: SectionBody,
}

impl Section {
    /// Creates a collapsed, non-live flat section.
    pub fn flat(kind: SectionKind, fields: Fields) -> Self {
        Self {
            kind,
            expanded: false,
            live: false,
            body: SectionBody::Flat(fields),
        }
    }

    /// Creates a collapsed, non-live tree section.
    pub fn tree(kind: SectionKind, items: Vec<TreeItem>) -> Self {
        Self {
            kind,
            expanded: false,
            live: false,
            body: SectionBody::Tree(items),
        }
    }

    /// Marks the section as live-capable.
    pub fn with_live(mut self, live: bool) -> Self {
        self.live = live;
        self
    }

    /// Section name.
    pub fn name(&self) -> &'static str {
        self.kind.title()
    }

    /// Section content.
    pub fn body(&self) -> &SectionBody {
        &self.body
    }

    /// Flat fields, if this is a flat section.
    pub fn fields(&self) -> Option<&Fields> {
        match &self.body {
            SectionBody::Flat(fields) => Some(fields),
            SectionBody::Tree(_) => None,
        }
    }

    /// Mutable flat fields, if this is a flat section.
    ///
    /// Only values can be changed through [`Fields::set`]; the body shape
    /// itself is not replaceable.
    pub fn fields_mut(&mut self) -> Option<&mut Fields> {
        match &mut self.body {
            SectionBody::Flat(fields) => Some(fields),
            SectionBody::Tree(_) => None,
        }
    }

    /// Tree items, if this is a tree section.
    pub fn items(&self) -> Option<&[TreeItem]> {
        match &self.body {
            SectionBody::Flat(_) => None,
            SectionBody::Tree(items) => Some(items),
        }
    }

    /// Returns true if the section has no content at all.
    pub fn is_empty(&self) -> bool {
        match &self.body {
            SectionBody::Flat(fields) => fields.is_empty(),
            SectionBody::Tree(items) => items.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_titles_are_unique() {
        let mut titles: Vec<&str> = SectionKind::ALL.iter().map(|k| k.title()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), SectionKind::ALL.len());
    }

    #[test]
    fn test_flat_section_defaults() {
        let section = Section::flat(SectionKind::Memory, Fields::new().with("Total RAM", "1 GiB"));

        assert_eq!(section.name(), "Memory");
        assert!(!section.expanded);
        assert!(!section.live);
        assert!(section.fields().is_some());
        assert!(section.items().is_none());
    }

    #[test]
    fn test_tree_section_has_no_flat_fields() {
        let mut section = Section::tree(
            SectionKind::Disk,
            vec![TreeItem::new("Partition 1", Fields::new().with("Mount", "/"))],
        );

        assert!(section.fields_mut().is_none());
        assert_eq!(section.items().map(<[TreeItem]>::len), Some(1));
    }

    #[test]
    fn test_empty_section() {
        assert!(Section::tree(SectionKind::Network, Vec::new()).is_empty());
        assert!(!Section::flat(SectionKind::Cpu, Fields::new().with("a", "b")).is_empty());
    }
}
