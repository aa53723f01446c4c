//! Splash screen component
//!
//! Shows a small easel and the artist's name briefly before the page.

use super::text::display_width;
use crate::action::Action;
use crate::component::Component;
use crate::environment::ViewEnvironment;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

pub struct SplashComponent {
    title: String,
    subtitle: String,
    /// When the splash screen was shown
    start_time: Option<Instant>,
    /// Duration to show splash before auto-advancing
    duration: Duration,
}

impl SplashComponent {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            start_time: None,
            duration: Duration::from_millis(1200),
        }
    }

    #[cfg(test)]
    fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Check if splash duration has elapsed
    pub fn is_complete(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    fn easel() -> [&'static str; 9] {
        [
            "      /\\      ",
            "  .--/--\\--.  ",
            "  | ~ *  ~ |  ",
            "  |  ~~ o  |  ",
            "  | *  ~ ~ |  ",
            "  '--/--\\--'  ",
            "    /    \\    ",
            "   /      \\   ",
            "  /        \\  ",
        ]
    }
}

impl Component for SplashComponent {
    fn mount(&mut self, _env: &mut dyn ViewEnvironment) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key press skips the splash screen
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let bg = Color::Rgb(0, 0, 0);

        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(bg)), area);

        let art = Self::easel();
        let art_height = art.len() as u16;
        let art_width = art.iter().map(|l| display_width(l)).max().unwrap_or(0) as u16;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(area.height.saturating_sub(art_height + 4) / 2),
                Constraint::Length(art_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let art_lines: Vec<Line> = art
            .iter()
            .map(|line| {
                let spans: Vec<Span> = line
                    .chars()
                    .map(|c| {
                        let fg = match c {
                            '~' => Color::Magenta,
                            '*' => Color::Yellow,
                            'o' => Color::Cyan,
                            _ => Color::Rgb(180, 140, 100),
                        };
                        Span::styled(c.to_string(), Style::default().fg(fg).bg(bg))
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();
        let centered = |width: u16, row: Rect| {
            Rect::new(
                row.x + row.width.saturating_sub(width) / 2,
                row.y,
                width.min(row.width),
                row.height,
            )
        };
        frame.render_widget(Paragraph::new(art_lines), centered(art_width, chunks[1]));

        let title_width = display_width(&self.title) as u16;
        frame.render_widget(
            Paragraph::new(Span::styled(
                self.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            )),
            centered(title_width, chunks[3]),
        );

        let subtitle_width = display_width(&self.subtitle) as u16;
        frame.render_widget(
            Paragraph::new(Span::styled(
                self.subtitle.clone(),
                Style::default().fg(Color::DarkGray).bg(bg),
            )),
            centered(subtitle_width, chunks[4]),
        );

        Ok(())
    }
}
