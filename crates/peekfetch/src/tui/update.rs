//! The navigation reducer.
//!
//! [`update`] applies exactly one [`Event`] to the navigation state and
//! returns the [`Command`] the event loop should carry out. It performs no
//! I/O; live values are fetched by the caller when it sees
//! [`Command::RefreshLive`].

use peekfetch_models::Section;

use super::layout;
use super::scheduler::TickHandle;
use super::state::{viewport_for, NavigationState};

/// Discrete input to the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Scroll up, or select the previous section.
    MoveUp,
    /// Scroll down, or select the next section.
    MoveDown,
    /// Scroll up half a viewport.
    PageUp,
    /// Scroll down half a viewport.
    PageDown,
    /// Expand or collapse the selected section.
    ToggleExpand,
    /// Turn live refresh on or off.
    ToggleLive,
    /// The terminal was resized.
    Resize { width: u16, height: u16 },
    /// A scheduled refresh tick fired.
    Tick(TickHandle),
    /// Leave the dashboard.
    Quit,
}

/// Side effect requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    Quit,
    /// Arm the next refresh tick.
    ScheduleTick,
    /// Disarm the refresh timer and invalidate in-flight ticks.
    CancelTick,
    /// Re-query live fields and merge them into the sections.
    RefreshLive,
    Batch(Vec<Command>),
}

/// Content lines of the selected section, zero when collapsed.
pub fn content_lines(state: &NavigationState, sections: &[Section]) -> usize {
    match sections.get(state.selected) {
        Some(section) if section.expanded => layout::line_count(section),
        _ => 0,
    }
}

fn selected_expanded(state: &NavigationState, sections: &[Section]) -> bool {
    sections
        .get(state.selected)
        .map(|section| section.expanded)
        .unwrap_or(false)
}

/// Applies `event` to `state`.
///
/// `sections` is only mutated by [`Event::ToggleExpand`], which flips the
/// selected section's `expanded` flag.
pub fn update(state: &mut NavigationState, sections: &mut [Section], event: Event) -> Command {
    match event {
        Event::MoveUp => {
            if selected_expanded(state, sections) && state.scroll_offset > 0 {
                state.scroll_offset -= 1;
            } else if state.selected > 0 {
                state.selected -= 1;
                state.scroll_offset = 0;
            }
            Command::None
        }
        Event::MoveDown => {
            let lines = content_lines(state, sections);
            if selected_expanded(state, sections) && state.scroll_offset < state.max_scroll(lines)
            {
                state.scroll_offset += 1;
            } else if state.selected + 1 < sections.len() {
                state.selected += 1;
                state.scroll_offset = 0;
            }
            Command::None
        }
        Event::PageUp => {
            if selected_expanded(state, sections) && state.scroll_offset > 0 {
                state.scroll_offset = state.scroll_offset.saturating_sub(state.half_page());
            }
            Command::None
        }
        Event::PageDown => {
            let max = state.max_scroll(content_lines(state, sections));
            if selected_expanded(state, sections) && max > 0 {
                state.scroll_offset = (state.scroll_offset + state.half_page()).min(max);
            }
            Command::None
        }
        Event::ToggleExpand => {
            if let Some(section) = sections.get_mut(state.selected) {
                section.expanded = !section.expanded;
            }
            state.scroll_offset = 0;
            Command::None
        }
        Event::ToggleLive => {
            state.live_mode = !state.live_mode;
            if state.live_mode {
                Command::ScheduleTick
            } else {
                Command::CancelTick
            }
        }
        Event::Resize { width, height } => {
            state.width = width;
            state.height = height;
            state.viewport_height = viewport_for(height);
            // A taller viewport can shrink the scroll range.
            let max = state.max_scroll(content_lines(state, sections));
            state.scroll_offset = state.scroll_offset.min(max);
            Command::None
        }
        Event::Tick(_) => {
            if state.live_mode {
                Command::Batch(vec![Command::RefreshLive, Command::ScheduleTick])
            } else {
                Command::None
            }
        }
        Event::Quit => Command::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::scheduler::RefreshScheduler;
    use peekfetch_models::{Fields, SectionKind, TreeItem};
    use std::time::Instant;

    fn tree(items: usize, children: usize) -> Section {
        let items = (0..items)
            .map(|i| {
                let fields = (0..children)
                    .map(|c| (format!("Key {}", c), format!("{}", c)))
                    .collect();
                TreeItem::new(format!("Item {}", i), fields)
            })
            .collect();
        Section::tree(SectionKind::Disk, items)
    }

    fn sections() -> Vec<Section> {
        vec![
            Section::flat(SectionKind::System, Fields::new().with("Hostname", "box")),
            tree(2, 3),
            Section::flat(SectionKind::Memory, Fields::new().with("Usage", "10.0%")),
        ]
    }

    fn state(viewport_height: usize) -> NavigationState {
        NavigationState {
            viewport_height,
            ..Default::default()
        }
    }

    fn tick() -> Event {
        Event::Tick(RefreshScheduler::default().schedule(Instant::now()))
    }

    #[test]
    fn test_move_up_at_top_is_noop() {
        let mut state = state(5);
        let mut sections = sections();
        let before = (state.clone(), sections.clone());

        assert_eq!(update(&mut state, &mut sections, Event::MoveUp), Command::None);
        assert_eq!((state, sections), before);
    }

    #[test]
    fn test_move_between_collapsed_sections() {
        let mut state = state(5);
        let mut sections = sections();

        update(&mut state, &mut sections, Event::MoveDown);
        update(&mut state, &mut sections, Event::MoveDown);
        assert_eq!(state.selected, 2);

        update(&mut state, &mut sections, Event::MoveDown);
        assert_eq!(state.selected, 2);

        update(&mut state, &mut sections, Event::MoveUp);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_scroll_before_crossing_sections() {
        let mut state = state(5);
        let mut sections = sections();
        state.selected = 1;
        update(&mut state, &mut sections, Event::ToggleExpand);

        // 8 lines in a 5-line viewport scroll three times first.
        for expected in 1..=3 {
            update(&mut state, &mut sections, Event::MoveDown);
            assert_eq!((state.selected, state.scroll_offset), (1, expected));
        }
        update(&mut state, &mut sections, Event::MoveDown);
        assert_eq!((state.selected, state.scroll_offset), (2, 0));

        update(&mut state, &mut sections, Event::MoveUp);
        assert_eq!((state.selected, state.scroll_offset), (1, 0));
    }

    #[test]
    fn test_move_up_scrolls_first() {
        let mut state = state(5);
        let mut sections = sections();
        state.selected = 1;
        update(&mut state, &mut sections, Event::ToggleExpand);
        update(&mut state, &mut sections, Event::MoveDown);
        update(&mut state, &mut sections, Event::MoveDown);

        update(&mut state, &mut sections, Event::MoveUp);
        assert_eq!((state.selected, state.scroll_offset), (1, 1));
    }

    #[test]
    fn test_page_scroll_is_clamped() {
        let mut state = state(5);
        let mut sections = vec![tree(3, 4)];
        update(&mut state, &mut sections, Event::ToggleExpand);

        // 15 lines, max scroll 10, half page 2.
        update(&mut state, &mut sections, Event::PageDown);
        assert_eq!(state.scroll_offset, 2);
        for _ in 0..10 {
            update(&mut state, &mut sections, Event::PageDown);
        }
        assert_eq!(state.scroll_offset, 10);

        update(&mut state, &mut sections, Event::PageUp);
        assert_eq!(state.scroll_offset, 8);
        for _ in 0..10 {
            update(&mut state, &mut sections, Event::PageUp);
        }
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_page_keys_ignore_collapsed_sections() {
        let mut state = state(5);
        let mut sections = sections();
        state.selected = 1;

        update(&mut state, &mut sections, Event::PageDown);
        assert_eq!((state.selected, state.scroll_offset), (1, 0));
        update(&mut state, &mut sections, Event::PageUp);
        assert_eq!((state.selected, state.scroll_offset), (1, 0));
    }

    #[test]
    fn test_page_down_without_overflow_is_noop() {
        let mut state = state(10);
        let mut sections = vec![tree(2, 3)];
        update(&mut state, &mut sections, Event::ToggleExpand);

        update(&mut state, &mut sections, Event::PageDown);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_toggle_expand_resets_scroll() {
        let mut state = state(5);
        let mut sections = vec![tree(2, 3)];
        update(&mut state, &mut sections, Event::ToggleExpand);
        update(&mut state, &mut sections, Event::MoveDown);
        assert_eq!(state.scroll_offset, 1);

        update(&mut state, &mut sections, Event::ToggleExpand);
        assert!(!sections[0].expanded);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_toggle_live_commands() {
        let mut state = state(5);
        let mut sections = sections();

        assert_eq!(
            update(&mut state, &mut sections, Event::ToggleLive),
            Command::ScheduleTick
        );
        assert!(state.live_mode);
        assert_eq!(
            update(&mut state, &mut sections, Event::ToggleLive),
            Command::CancelTick
        );
        assert!(!state.live_mode);
    }

    #[test]
    fn test_tick_refreshes_only_in_live_mode() {
        let mut state = state(5);
        let mut sections = sections();

        assert_eq!(update(&mut state, &mut sections, tick()), Command::None);

        state.live_mode = true;
        assert_eq!(
            update(&mut state, &mut sections, tick()),
            Command::Batch(vec![Command::RefreshLive, Command::ScheduleTick])
        );
    }

    #[test]
    fn test_resize_updates_viewport_and_clamps_scroll() {
        let mut state = state(5);
        let mut sections = vec![tree(2, 3)];
        update(&mut state, &mut sections, Event::ToggleExpand);
        for _ in 0..3 {
            update(&mut state, &mut sections, Event::MoveDown);
        }
        assert_eq!(state.scroll_offset, 3);

        update(
            &mut state,
            &mut sections,
            Event::Resize {
                width: 120,
                height: 40,
            },
        );
        assert_eq!((state.width, state.height), (120, 40));
        assert_eq!(state.viewport_height, 31);
        assert_eq!(state.scroll_offset, 0);

        update(
            &mut state,
            &mut sections,
            Event::Resize {
                width: 20,
                height: 3,
            },
        );
        assert_eq!(state.viewport_height, 5);
    }

    #[test]
    fn test_quit() {
        let mut state = state(5);
        let mut sections = sections();
        assert_eq!(update(&mut state, &mut sections, Event::Quit), Command::Quit);
    }

    #[test]
    fn test_empty_section_list() {
        let mut state = state(5);
        let mut sections: Vec<Section> = Vec::new();

        for event in [Event::MoveDown, Event::MoveUp, Event::ToggleExpand, Event::PageDown] {
            update(&mut state, &mut sections, event);
        }
        assert_eq!((state.selected, state.scroll_offset), (0, 0));
    }
}
