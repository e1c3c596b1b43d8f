//! Dashboard rendering using ratatui.
//!
//! [`body_lines`] and [`footer_lines`] build the screen as text lines from
//! the state and the section store; [`draw`] hands them to the terminal.
//! None of them mutates anything.

use peekfetch_models::Section;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::layout;
use super::state::NavigationState;
use super::theme;

const BANNER: [&str; 4] = [
    r"  ___  ___ ___| | __/ _| ___| |_ ___| |__  ",
    r" | _ \/ -_) -_) |/ /  _|/ -_)  _/ _| '  \ ",
    r" |  _/\___\___|_|\_\_|  \___|\__\__|_||_| ",
    r" |_|                                      ",
];

const HEADER: &str = "⚡ Interactive System Information";
const LIVE_BADGE: &str = " ● LIVE ";
const CONTENT_PREFIX: &str = "  │ ";
const MORE_ABOVE: &str = "    ▲ More above (↑ or PgUp)";
const MORE_BELOW: &str = "    ▼ More below (↓ or PgDn)";
const FOOTER: &str = "↑↓ Navigate/Scroll │ PgUp/PgDn Fast Scroll │ ⏎ Expand │ L Live │ Q Quit";

/// Draw the dashboard.
///
/// The footer is pinned to the bottom rows. When the body is taller than
/// the space left, its top rows are cropped so the section list below an
/// expanded section and the scroll indicators stay visible.
pub fn draw(frame: &mut Frame, state: &NavigationState, sections: &[Section]) {
    let footer = footer_lines();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                       // Body
            Constraint::Length(footer.len() as u16), // Footer
        ])
        .split(frame.area());

    let body = body_lines(state, sections);
    let overflow = body.len().saturating_sub(usize::from(chunks[0].height));
    let overflow = u16::try_from(overflow).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(body).scroll((overflow, 0)), chunks[0]);
    frame.render_widget(Paragraph::new(footer), chunks[1]);
}

/// Every line of one frame, top to bottom, before any cropping.
pub fn frame_lines(state: &NavigationState, sections: &[Section]) -> Vec<Line<'static>> {
    let mut lines = body_lines(state, sections);
    lines.extend(footer_lines());
    lines
}

/// Banner, header, section list and the expanded section's content.
pub fn body_lines(state: &NavigationState, sections: &[Section]) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = BANNER
        .iter()
        .map(|row| Line::styled(*row, theme::banner()))
        .collect();
    lines.push(Line::default());

    lines.push(header_line(state.live_mode));
    lines.push(Line::default());

    for (index, section) in sections.iter().enumerate() {
        let selected = index == state.selected;
        lines.push(section_line(section, selected));

        if selected && section.expanded {
            content_block(state, section, &mut lines);
        }
    }

    lines
}

/// Spacer and keybinding legend.
pub fn footer_lines() -> Vec<Line<'static>> {
    vec![Line::default(), Line::styled(FOOTER, theme::muted())]
}

fn header_line(live: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(HEADER, theme::header())];
    if live {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(LIVE_BADGE, theme::live_badge()));
    }
    Line::from(spans)
}

fn section_line(section: &Section, selected: bool) -> Line<'static> {
    let indicator = if section.expanded { "▾" } else { "▸" };
    let text = format!(" {}  {} {}", indicator, section.kind.icon(), section.name());
    let style = if selected { theme::selected() } else { theme::normal() };
    Line::styled(text, style)
}

/// Visible slice of the selected section's content with scroll indicators.
fn content_block(state: &NavigationState, section: &Section, lines: &mut Vec<Line<'static>>) {
    let width = state.width.saturating_sub(CONTENT_PREFIX.chars().count() as u16);
    let content = layout::render_lines(section, width);
    let total = content.len();

    if total == 0 {
        lines.push(Line::from(vec![
            Span::styled(CONTENT_PREFIX, theme::tree()),
            Span::styled("(no data)", theme::muted()),
        ]));
        return;
    }

    let start = state.scroll_offset.min(total);
    let end = (start + state.viewport_height).min(total);

    for line in content.into_iter().skip(start).take(end - start) {
        let mut spans = vec![Span::styled(CONTENT_PREFIX, theme::tree())];
        spans.extend(line.spans);
        lines.push(Line::from(spans));
    }
    if start > 0 {
        lines.push(Line::styled(MORE_ABOVE, theme::muted()));
    }
    if end < total {
        lines.push(Line::styled(MORE_BELOW, theme::muted()));
    }
}
