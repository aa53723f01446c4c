//! portfolio-tui - an artist's portfolio page in the terminal
//!
//! This is the main entry point for the portfolio-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod environment;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::{Config, Overrides};
use crate::model::content::{AssetBase, SiteContent};
use crate::tui::Tui;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::Event;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "portfolio-tui", version, about = "An artist's portfolio page in the terminal")]
struct Cli {
    /// Prefix for asset URLs, e.g. /portfolio/ for sub-path hosting
    #[arg(long)]
    base_url: Option<String>,

    /// YAML file replacing the built-in page content
    #[arg(long, value_name = "PATH")]
    content: Option<String>,

    /// Skip the splash screen
    #[arg(long)]
    no_splash: bool,

    /// Write the effective settings to the config file and continue
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let config = Config::load_or_default().apply(Overrides {
        base_url: cli.base_url,
        content_path: cli.content,
        no_splash: cli.no_splash,
    });
    if cli.save_config {
        config.save().context("Failed to save config")?;
        tracing::info!("config saved");
    }

    // Content problems abort before the terminal is touched
    let content = match &config.content_path {
        Some(path) => SiteContent::load(Path::new(path))?,
        None => SiteContent::default(),
    };

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(config.tick_rate_ms.max(1)));
    tui.enter()?;

    // Create app state
    let mut app = App::new(content, AssetBase::new(config.base_url.clone()))
        .with_splash(config.show_splash);
    let result = app.init().and_then(|()| run_app(&mut tui, &mut app));
    app.teardown();

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("{:#}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw only when something changed
        if app.needs_redraw() {
            let mut draw_result = Ok(());
            tui.draw(|frame| {
                draw_result = app.draw(frame, frame.area());
            })?;
            draw_result?;
            app.mark_drawn();
        }

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Process the action and any follow-ups
            if let Some(action) = action {
                app.apply(action)?;
            }
        } else {
            // No event - send a tick for time-based updates
            app.apply(Action::Tick)?;
        }
    }

    Ok(())
}
