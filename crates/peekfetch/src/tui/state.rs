//! Navigation state owned by the controller.

/// Smallest number of content rows an expanded section gets.
pub const MIN_VIEWPORT_HEIGHT: usize = 5;

/// Rows taken by the banner, header and footer.
pub const RESERVED_ROWS: usize = 9;

/// Terminal size assumed until the first resize event.
pub const DEFAULT_SIZE: (u16, u16) = (80, 24);

/// Content viewport height for a terminal of `height` rows.
pub fn viewport_for(height: u16) -> usize {
    usize::from(height)
        .saturating_sub(RESERVED_ROWS)
        .max(MIN_VIEWPORT_HEIGHT)
}

/// Navigation state.
///
/// Created once at startup and mutated only by [`super::update::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    /// Index of the selected section.
    pub selected: usize,
    /// First visible content line of the selected, expanded section.
    pub scroll_offset: usize,
    /// Whether live refresh is on.
    pub live_mode: bool,
    /// Terminal width in columns.
    pub width: u16,
    /// Terminal height in rows.
    pub height: u16,
    /// Content lines visible at once, never below [`MIN_VIEWPORT_HEIGHT`].
    pub viewport_height: usize,
}

impl Default for NavigationState {
    fn default() -> Self {
        let (width, height) = DEFAULT_SIZE;
        Self {
            selected: 0,
            scroll_offset: 0,
            live_mode: false,
            width,
            height,
            viewport_height: viewport_for(height),
        }
    }
}

impl NavigationState {
    /// Creates the startup state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest valid scroll offset for content of `content_lines` lines.
    pub fn max_scroll(&self, content_lines: usize) -> usize {
        content_lines.saturating_sub(self.viewport_height)
    }

    /// Half a viewport, the page scroll step.
    pub fn half_page(&self) -> usize {
        self.viewport_height / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_for() {
        assert_eq!(viewport_for(24), 15);
        assert_eq!(viewport_for(14), 5);
        assert_eq!(viewport_for(10), MIN_VIEWPORT_HEIGHT);
        assert_eq!(viewport_for(0), MIN_VIEWPORT_HEIGHT);
    }

    #[test]
    fn test_startup_state() {
        let state = NavigationState::new();
        assert_eq!(state.selected, 0);
        assert_eq!(state.scroll_offset, 0);
        assert!(!state.live_mode);
        assert!(state.viewport_height >= MIN_VIEWPORT_HEIGHT);
    }

    #[test]
    fn test_max_scroll() {
        let state = NavigationState {
            viewport_height: 5,
            ..Default::default()
        };
        assert_eq!(state.max_scroll(8), 3);
        assert_eq!(state.max_scroll(5), 0);
        assert_eq!(state.max_scroll(2), 0);
        assert_eq!(state.half_page(), 2);
    }
}
