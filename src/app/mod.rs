pub mod headless;
pub mod help;
pub mod input;
pub mod render;
pub mod scoreboard;
pub mod state;

pub use state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use bloomia_tui::Tui;

impl App {
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let fps = self.config.display.target_fps.max(1);
        let tick_rate = Duration::from_millis(1000 / fps);
        let mut last_tick = Instant::now();

        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Ctrl+C received, shutting down");
            shutdown_clone.store(true, Ordering::SeqCst);
        });

        self.resize(tui.area()?);
        self.restart();
        self.refresh_leaderboard();

        while self.running && !shutdown.load(Ordering::SeqCst) {
            tui.terminal.draw(|f| {
                self.draw(f);
            })?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key);
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(width, height) => {
                        tracing::info!(width, height, "Terminal resized, restarting run");
                        self.resize(Rect::new(0, 0, width, height));
                        self.restart();
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                let dt_ms = last_tick.elapsed().as_secs_f64() * 1000.0;
                self.controller.tick(dt_ms);
                self.process_run_events();
                self.process_scoreboard_updates();
                last_tick = Instant::now();
            }
        }

        self.abandon();
        self.metrics.log_summary();
        Ok(())
    }
}
