//! TUI rendering and input handling for Embedscope.

mod diagram;
mod input;
mod layout;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use layout::{ClickTarget, ScreenLayout};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use embedscope_engine::{App, Architecture, STEP_INTERVAL};
use embedscope_types::STEP_COUNT;

use self::diagram::{Fade, compose};

const HEADER_TITLE: &str = "Word Embedding Architectures";

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let layout = ScreenLayout::compute(frame.area());

    frame.render_widget(
        Paragraph::new(Span::styled(HEADER_TITLE, styles::title(&palette))),
        layout.title,
    );
    draw_buttons(frame, app, &layout, &palette, &glyphs);
    draw_tabs(frame, app, &layout, &palette);
    draw_card(frame, app, layout.card, &palette, &glyphs);
    draw_status_bar(frame, app, layout.status, &palette, &glyphs);
}

fn draw_buttons(
    frame: &mut Frame,
    app: &App,
    layout: &ScreenLayout,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let (label, style) = if app.is_playing() {
        (format!("{} Pause", glyphs.pause), styles::pause_button(palette))
    } else {
        (
            format!("{} Play Animation", glyphs.play),
            styles::play_button(palette),
        )
    };
    let play = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style),
        );
    frame.render_widget(play, layout.play_button);

    let enabled = !app.is_playing();
    let step_style = styles::step_button(palette, enabled);
    let step = Paragraph::new("Next Step")
        .alignment(Alignment::Center)
        .style(step_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if enabled {
                    palette.bg_border
                } else {
                    palette.text_disabled
                })),
        );
    frame.render_widget(step, layout.step_button);
}

fn draw_tabs(frame: &mut Frame, app: &App, layout: &ScreenLayout, palette: &Palette) {
    let selected = app.architecture();
    for architecture in Architecture::all() {
        let is_selected = *architecture == selected;
        let mut style = styles::tab(palette, is_selected);
        if is_selected {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        let tab = Paragraph::new(architecture.tab_label())
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(tab, layout.tab_area(*architecture));
    }
}

fn draw_card(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let architecture = app.architecture();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary_dim))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::horizontal(1))
        .title(Line::from(Span::styled(
            format!(" {} ", architecture.title()),
            styles::title(palette),
        )));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Step banner
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Diagram
        ])
        .split(inner);

    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Step {}: ", app.step().number()),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.description(), Style::default().fg(palette.text_primary)),
    ]))
    .block(
        Block::default()
            .style(Style::default().bg(palette.bg_banner))
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(banner, chunks[1]);

    let elapsed = app.frame_elapsed();
    let (progress, fade_done) = match app.transition_mut() {
        Some(transition) => {
            transition.advance(elapsed);
            (Some(transition.progress()), transition.is_finished())
        }
        None => (None, false),
    };
    if fade_done {
        app.clear_transition();
    }

    let current = app.diagram();
    let previous = app.previous_diagram();
    let fade = previous
        .as_ref()
        .zip(progress)
        .map(|(previous, progress)| Fade { previous, progress });
    let figure = compose(&current, fade, palette, glyphs);

    let diagram_area = chunks[3];
    // Too wide to center: keep the left edge visible and clip on the right.
    let alignment = if figure.width() > usize::from(diagram_area.width) {
        Alignment::Left
    } else {
        Alignment::Center
    };
    let lines = figure.into_lines();
    let top = diagram_area.height.saturating_sub(lines.len() as u16) / 2;
    let area = Rect {
        y: diagram_area.y + top,
        height: diagram_area.height - top,
        ..diagram_area
    };
    frame.render_widget(Paragraph::new(lines).alignment(alignment), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let (state, state_style) = if app.is_playing() {
        (
            format!(
                "{} Playing every {}s",
                glyphs.play,
                STEP_INTERVAL.as_secs()
            ),
            Style::default().fg(palette.active),
        )
    } else {
        (
            format!("{} Paused", glyphs.pause),
            Style::default().fg(palette.text_secondary),
        )
    };

    let sep = Span::styled(format!(" {} ", glyphs.separator), styles::key_hint(palette));
    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(state, state_style),
        sep.clone(),
        Span::styled(
            format!("Step {}/{}", app.step().number(), STEP_COUNT),
            Style::default().fg(palette.text_secondary),
        ),
        sep,
        Span::styled("Space", styles::key_highlight(palette)),
        Span::styled(" play  ", styles::key_hint(palette)),
        Span::styled("n", styles::key_highlight(palette)),
        Span::styled(" next  ", styles::key_hint(palette)),
        Span::styled(glyphs.arrows_hint, styles::key_highlight(palette)),
        Span::styled(" model  ", styles::key_hint(palette)),
        Span::styled("1-4", styles::key_highlight(palette)),
        Span::styled(" pick  ", styles::key_hint(palette)),
        Span::styled("q", styles::key_highlight(palette)),
        Span::styled(" quit", styles::key_hint(palette)),
    ]));
    frame.render_widget(status, area);
}
