//! Content layout for an expanded section.
//!
//! [`render_lines`] turns a section into display lines and [`line_count`]
//! predicts how many there will be without building them. Both are pure;
//! the controller uses the count for scroll bounds and the renderer uses
//! the lines, so they must always agree.

use peekfetch_models::{Field, Fields, Section, SectionBody, TreeItem};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme;

/// Progress bar width in flat sections.
pub const FLAT_BAR_WIDTH: usize = 20;

/// Progress bar width under tree items.
pub const TREE_BAR_WIDTH: usize = 18;

/// Values are never squeezed below this many columns.
const MIN_VALUE_WIDTH: usize = 8;

const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';
const SEPARATOR: &str = "│";

/// Severity band of a usage percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Below 50%.
    Low,
    /// 50% to below 75%.
    Medium,
    /// 75% to below 90%.
    High,
    /// 90% and above.
    Critical,
}

impl Severity {
    /// Band for `percent`.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 90.0 {
            Severity::Critical
        } else if percent >= 75.0 {
            Severity::High
        } else if percent >= 50.0 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    /// Bar color for the band.
    pub fn color(self) -> Color {
        match self {
            Severity::Low => theme::SUCCESS,
            Severity::Medium => theme::PRIMARY,
            Severity::High => theme::WARNING,
            Severity::Critical => theme::DANGER,
        }
    }
}

/// Number of lines [`render_lines`] produces for `section`.
pub fn line_count(section: &Section) -> usize {
    match section.body() {
        SectionBody::Flat(fields) => fields.len(),
        SectionBody::Tree(items) => items.iter().map(|item| 1 + item.children.len()).sum(),
    }
}

/// Display lines for `section` at a content width of `width` columns.
pub fn render_lines(section: &Section, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width);
    match section.body() {
        SectionBody::Flat(fields) => flat_lines(fields, width),
        SectionBody::Tree(items) => tree_lines(items, width),
    }
}

/// Parses a usage percentage eligible for a progress bar.
///
/// Only values ending in `%` under keys containing `Usage` qualify.
/// Anything unparsable yields `None` and is rendered as plain text.
pub fn usage_percent(key: &str, value: &str) -> Option<f64> {
    if !key.contains("Usage") {
        return None;
    }
    let number = value.strip_suffix('%')?.trim();
    number.parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Filled cells of a `width`-cell bar at `percent`.
pub fn bar_fill(percent: f64, width: usize) -> usize {
    let clamped = percent.clamp(0.0, 100.0);
    ((clamped / 100.0) * width as f64).round() as usize
}

fn progress_bar(percent: f64, width: usize) -> Vec<Span<'static>> {
    let filled = bar_fill(percent, width);
    let color = Severity::from_percent(percent.clamp(0.0, 100.0)).color();

    vec![
        Span::raw("["),
        Span::styled(
            BAR_FILLED.to_string().repeat(filled),
            Style::default().fg(color),
        ),
        Span::styled(BAR_EMPTY.to_string().repeat(width - filled), theme::muted()),
        Span::raw("]"),
    ]
}

fn max_key_width(fields: &Fields) -> usize {
    fields.keys().map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Truncates `text` to `max` display columns, marking the cut with `…`.
fn fit(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Key, padding, bar or separator, value. `prefix` is already laid out.
fn field_line(
    mut spans: Vec<Span<'static>>,
    prefix_width: usize,
    field: &Field,
    key_style: Style,
    key_width: usize,
    bar_width: usize,
    width: usize,
) -> Line<'static> {
    let (key, value) = (field.key.as_str(), field.value.as_str());
    let pad = key_width.saturating_sub(key.width());
    spans.push(Span::styled(key.to_string(), key_style));
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(Span::raw(" "));

    let middle_width = match usage_percent(key, value) {
        Some(percent) => {
            spans.extend(progress_bar(percent, bar_width));
            bar_width + 2
        }
        None => {
            spans.push(Span::styled(SEPARATOR, theme::tree()));
            1
        }
    };
    spans.push(Span::raw(" "));

    let used = prefix_width + key_width + 1 + middle_width + 1;
    let budget = width.saturating_sub(used).max(MIN_VALUE_WIDTH);
    spans.push(Span::styled(fit(value, budget), theme::value()));

    Line::from(spans)
}

fn flat_lines(fields: &Fields, width: usize) -> Vec<Line<'static>> {
    let key_width = max_key_width(fields);

    fields
        .iter()
        .map(|field| {
            field_line(
                Vec::new(),
                0,
                field,
                theme::key(),
                key_width,
                FLAT_BAR_WIDTH,
                width,
            )
        })
        .collect()
}

fn tree_lines(items: &[TreeItem], width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, item) in items.iter().enumerate() {
        let last_item = i + 1 == items.len();
        let branch = if last_item { "└─" } else { "├─" };
        lines.push(Line::from(vec![
            Span::styled(branch, theme::tree()),
            Span::raw(" "),
            Span::styled(item.name.clone(), theme::key()),
        ]));

        // Keys align per item, not across the section.
        let key_width = max_key_width(&item.children);
        let child_count = item.children.len();

        for (j, field) in item.children.iter().enumerate() {
            let last_child = j + 1 == child_count;
            let branch = match (last_item, last_child) {
                (false, false) => "│  ├─",
                (false, true) => "│  └─",
                (true, false) => "   ├─",
                (true, true) => "   └─",
            };
            let prefix = vec![Span::styled(branch, theme::tree()), Span::raw(" ")];
            lines.push(field_line(
                prefix,
                branch.width() + 1,
                field,
                theme::sub_key(),
                key_width,
                TREE_BAR_WIDTH,
                width,
            ));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use peekfetch_models::SectionKind;
    use proptest::prelude::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn memory() -> Section {
        Section::flat(
            SectionKind::Memory,
            Fields::new()
                .with("Total RAM", "16.00 GiB")
                .with("Used", "8.00 GiB")
                .with("Usage", "50.0%"),
        )
    }

    fn disks(items: usize, children: usize) -> Section {
        let items = (0..items)
            .map(|i| {
                let fields = (0..children)
                    .map(|c| (format!("Key {}", c), format!("value {}", c)))
                    .collect();
                TreeItem::new(format!("Partition {}", i + 1), fields)
            })
            .collect();
        Section::tree(SectionKind::Disk, items)
    }

    #[test]
    fn test_flat_memory_lines() {
        let lines = render_lines(&memory(), 80);

        assert_eq!(lines.len(), 3);
        assert_eq!(line_count(&memory()), 3);
        assert_eq!(text(&lines[0]), "Total RAM │ 16.00 GiB");
        assert_eq!(text(&lines[1]), "Used      │ 8.00 GiB");

        let usage = text(&lines[2]);
        let bar = format!("[{}{}]", "█".repeat(10), "░".repeat(10));
        assert_eq!(usage, format!("Usage     {} 50.0%", bar));

        let filled = lines[2]
            .spans
            .iter()
            .find(|s| s.content.contains('█'))
            .unwrap();
        assert_eq!(filled.style.fg, Some(Severity::Medium.color()));
    }

    #[test]
    fn test_tree_line_count() {
        let section = disks(2, 3);
        assert_eq!(line_count(&section), 8);
        assert_eq!(render_lines(&section, 80).len(), 8);
    }

    #[test]
    fn test_tree_branches() {
        let lines = render_lines(&disks(2, 2), 80);
        let texts: Vec<String> = lines.iter().map(text).collect();

        assert!(texts[0].starts_with("├─ Partition 1"));
        assert!(texts[1].starts_with("│  ├─ Key 0"));
        assert!(texts[2].starts_with("│  └─ Key 1"));
        assert!(texts[3].starts_with("└─ Partition 2"));
        assert!(texts[4].starts_with("   ├─ Key 0"));
        assert!(texts[5].starts_with("   └─ Key 1"));
    }

    #[test]
    fn test_tree_keys_align_per_item() {
        let section = Section::tree(
            SectionKind::Network,
            vec![
                TreeItem::new("Interface 1", Fields::new().with("Name", "eth0").with("IPv4", "10.0.0.1")),
                TreeItem::new("Statistics", Fields::new().with("Total Bytes Sent", "1 B").with("Name", "x")),
            ],
        );
        let texts: Vec<String> = render_lines(&section, 120).iter().map(text).collect();

        assert_eq!(texts[1], "│  ├─ Name │ eth0");
        assert_eq!(texts[5], "   └─ Name             │ x");
    }

    #[test]
    fn test_tree_usage_bar_width() {
        let section = Section::tree(
            SectionKind::Disk,
            vec![TreeItem::new("Partition 1", Fields::new().with("Usage", "100.0%"))],
        );
        let lines = render_lines(&section, 80);
        let usage = text(&lines[1]);
        assert!(usage.contains(&format!("[{}]", "█".repeat(TREE_BAR_WIDTH))));
    }

    #[test]
    fn test_empty_sections() {
        let flat = Section::flat(SectionKind::System, Fields::new());
        let tree = Section::tree(SectionKind::Disk, Vec::new());
        assert_eq!(line_count(&flat), 0);
        assert!(render_lines(&flat, 80).is_empty());
        assert_eq!(line_count(&tree), 0);
        assert!(render_lines(&tree, 80).is_empty());
    }

    #[test]
    fn test_severity_bands() {
        assert_eq!(Severity::from_percent(0.0), Severity::Low);
        assert_eq!(Severity::from_percent(49.9), Severity::Low);
        assert_eq!(Severity::from_percent(50.0), Severity::Medium);
        assert_eq!(Severity::from_percent(74.9), Severity::Medium);
        assert_eq!(Severity::from_percent(75.0), Severity::High);
        assert_eq!(Severity::from_percent(89.9), Severity::High);
        assert_eq!(Severity::from_percent(90.0), Severity::Critical);
        assert_ne!(Severity::Low.color(), Severity::Critical.color());
    }

    #[test]
    fn test_bar_fill_rounds_and_clamps() {
        assert_eq!(bar_fill(50.0, 20), 10);
        assert_eq!(bar_fill(52.5, 20), 11);
        assert_eq!(bar_fill(-5.0, 20), 0);
        assert_eq!(bar_fill(250.0, 20), 20);
        assert_eq!(bar_fill(100.0, 18), 18);
    }

    #[test]
    fn test_usage_percent_rules() {
        assert_eq!(usage_percent("Usage", "12.5%"), Some(12.5));
        assert_eq!(usage_percent("Swap Usage", "3.0%"), Some(3.0));
        assert_eq!(usage_percent("Used", "12.5%"), None);
        assert_eq!(usage_percent("Usage", "12.5"), None);
        assert_eq!(usage_percent("Usage", "N/A"), None);
        assert_eq!(usage_percent("Usage", "lots%"), None);
    }

    #[test]
    fn test_malformed_percent_renders_plain() {
        let section = Section::flat(SectionKind::Cpu, Fields::new().with("Usage", "N/A"));
        let lines = render_lines(&section, 80);
        assert_eq!(text(&lines[0]), "Usage │ N/A");
    }

    #[test]
    fn test_long_values_truncated() {
        let long = "x".repeat(200);
        let section = Section::flat(SectionKind::Cpu, Fields::new().with("Features", long.as_str()));
        let line = text(&render_lines(&section, 40)[0]);

        assert!(line.ends_with('…'));
        assert!(line.width() <= 40);
    }

    #[test]
    fn test_narrow_width_keeps_minimum_value() {
        let section = Section::flat(SectionKind::Cpu, Fields::new().with("Model", "abcdefghijklmnop"));
        let line = text(&render_lines(&section, 4)[0]);
        assert_eq!(line, "Model │ abcdefg…");
    }

    #[test]
    fn test_render_is_deterministic() {
        let section = memory();
        let first: Vec<String> = render_lines(&section, 80).iter().map(text).collect();
        let second: Vec<String> = render_lines(&section, 80).iter().map(text).collect();
        assert_eq!(first, second);
        assert_eq!(section, memory());
    }

    fn field() -> impl Strategy<Value = (String, String)> {
        let key = prop_oneof![Just("Usage".to_string()), "[A-Za-z ]{1,12}"];
        let value = prop_oneof![
            (-50.0f64..150.0).prop_map(|p| format!("{:.1}%", p)),
            Just("N/A".to_string()),
            Just("x%".to_string()),
            "\\PC{0,40}",
        ];
        (key, value)
    }

    fn fields() -> impl Strategy<Value = Fields> {
        prop::collection::vec(field(), 0..8).prop_map(|pairs| pairs.into_iter().collect())
    }

    fn section() -> impl Strategy<Value = Section> {
        prop_oneof![
            fields().prop_map(|f| Section::flat(SectionKind::Memory, f)),
            prop::collection::vec(fields(), 0..5).prop_map(|items| {
                let items = items
                    .into_iter()
                    .enumerate()
                    .map(|(i, f)| TreeItem::new(format!("Item {}", i), f))
                    .collect();
                Section::tree(SectionKind::Disk, items)
            }),
        ]
    }

    proptest! {
        #[test]
        fn test_rendered_lines_match_line_count(section in section(), width in 0u16..200) {
            prop_assert_eq!(render_lines(&section, width).len(), line_count(&section));
        }
    }
}
