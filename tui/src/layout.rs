//! Screen regions and pointer hit-testing.
//!
//! Drawing and mouse handling both derive their rectangles from
//! [`ScreenLayout::compute`], so a click lands on exactly what was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use embedscope_types::Architecture;

pub const PLAY_BUTTON_WIDTH: u16 = 22;
pub const STEP_BUTTON_WIDTH: u16 = 15;
const BUTTON_GAP: u16 = 2;

/// What a left click at a position activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    PlayPause,
    NextStep,
    Tab(Architecture),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub play_button: Rect,
    pub step_button: Rect,
    /// One rectangle per architecture, in tab order.
    pub tabs: Vec<Rect>,
    pub card: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    #[must_use]
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(3), // Buttons
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Tabs
                Constraint::Min(1),    // Card
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let buttons = chunks[1];
        let play_button = Rect {
            width: PLAY_BUTTON_WIDTH.min(buttons.width),
            ..buttons
        };
        let step_x = play_button.right().saturating_add(BUTTON_GAP);
        let step_button = Rect {
            x: step_x.min(buttons.right()),
            width: STEP_BUTTON_WIDTH.min(buttons.right().saturating_sub(step_x)),
            ..buttons
        };

        let tab_count = Architecture::all().len() as u32;
        let tabs = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                Architecture::all()
                    .iter()
                    .map(|_| Constraint::Ratio(1, tab_count)),
            )
            .split(chunks[3])
            .to_vec();

        Self {
            title: chunks[0],
            play_button,
            step_button,
            tabs,
            card: chunks[4],
            status: chunks[5],
        }
    }

    #[must_use]
    pub fn tab_area(&self, architecture: Architecture) -> Rect {
        self.tabs
            .get(architecture.index())
            .copied()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let position = Position::new(column, row);
        if self.play_button.contains(position) {
            return Some(ClickTarget::PlayPause);
        }
        if self.step_button.contains(position) {
            return Some(ClickTarget::NextStep);
        }
        self.tabs
            .iter()
            .position(|tab| tab.contains(position))
            .and_then(Architecture::from_index)
            .map(ClickTarget::Tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::compute(Rect::new(0, 0, 100, 30))
    }

    #[test]
    fn regions_stack_top_to_bottom() {
        let layout = layout();
        assert_eq!(layout.title.y, 0);
        assert_eq!(layout.play_button.y, 1);
        assert_eq!(layout.play_button.height, 3);
        assert_eq!(layout.tabs[0].y, 5);
        assert_eq!(layout.card.y, 6);
        assert_eq!(layout.status.y, 29);
    }

    #[test]
    fn buttons_do_not_overlap() {
        let layout = layout();
        assert!(layout.play_button.right() < layout.step_button.x);
        assert_eq!(layout.step_button.width, STEP_BUTTON_WIDTH);
    }

    #[test]
    fn tabs_split_row_evenly() {
        let layout = layout();
        assert_eq!(layout.tabs.len(), 4);
        let widths: Vec<u16> = layout.tabs.iter().map(|tab| tab.width).collect();
        let min = widths.iter().min().copied().unwrap();
        let max = widths.iter().max().copied().unwrap();
        assert!(max - min <= 1);
    }

    #[test]
    fn hit_test_finds_buttons_and_tabs() {
        let layout = layout();
        let play = layout.play_button;
        assert_eq!(
            layout.hit_test(play.x + 1, play.y + 1),
            Some(ClickTarget::PlayPause)
        );
        let step = layout.step_button;
        assert_eq!(
            layout.hit_test(step.x + 1, step.y + 1),
            Some(ClickTarget::NextStep)
        );
        for arch in Architecture::all() {
            let tab = layout.tab_area(*arch);
            assert_eq!(
                layout.hit_test(tab.x + tab.width / 2, tab.y),
                Some(ClickTarget::Tab(*arch))
            );
        }
    }

    #[test]
    fn hit_test_misses_empty_space() {
        let layout = layout();
        assert_eq!(layout.hit_test(0, 0), None);
        assert_eq!(layout.hit_test(50, 15), None);
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 5, 3));
        assert_eq!(layout.tabs.len(), 4);
        let _ = layout.hit_test(1, 1);
    }
}
