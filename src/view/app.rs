//! The eframe window.
//!
//! A bottom panel holds the Start/Pause and Reset buttons; the central panel
//! is the time label, centred and filling all remaining space.

use anyhow::Result;
use eframe::egui::{self, Button, Event, FontId, RichText, TopBottomPanel, ViewportCommand};
use tracing::{debug, info};

use super::controls::{WindowCommand, BUTTON_MIN_HEIGHT, RESET_LABEL};
use super::shell::ViewShell;
use super::{DEFAULT_WINDOW_SIZE, WINDOW_TITLE};
use crate::sound::SoundPlayer;
use crate::timer::SystemClock;
use crate::types::TimerConfig;

/// eframe application wrapping a [`ViewShell`].
pub struct CountdownApp {
    shell: ViewShell<SystemClock, Box<dyn SoundPlayer>>,
}

impl CountdownApp {
    /// Creates the app for `config`, playing cues through `sounds`.
    pub fn new(config: TimerConfig, sounds: Box<dyn SoundPlayer>) -> Self {
        Self {
            shell: ViewShell::new(config, SystemClock, sounds),
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let (fullscreen, size, keys) = ctx.input(|i| {
            let keys: Vec<_> = i
                .events
                .iter()
                .filter_map(|event| match event {
                    Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        modifiers,
                        ..
                    } => Some((*key, *modifiers)),
                    _ => None,
                })
                .collect();
            (i.viewport().fullscreen, i.screen_rect().size(), keys)
        });

        if let Some(fullscreen) = fullscreen {
            self.shell.sync_fullscreen(fullscreen);
        }

        for (key, modifiers) in keys {
            if let Some(command) = self.shell.on_key(key, modifiers) {
                apply_window_command(ctx, command);
            }
        }

        self.shell.on_resize(size.x, size.y);
    }

    fn show_buttons(&mut self, ui: &mut egui::Ui) {
        let start_pause = self.shell.start_pause_button();
        let mut start_pause_clicked = false;
        let mut reset_clicked = false;

        ui.columns(2, |columns| {
            let width = columns[0].available_width();
            if start_pause.visible {
                start_pause_clicked = columns[0]
                    .add_sized([width, BUTTON_MIN_HEIGHT], Button::new(start_pause.label))
                    .clicked();
            }
            reset_clicked = columns[1]
                .add_sized([width, BUTTON_MIN_HEIGHT], Button::new(RESET_LABEL))
                .clicked();
        });

        if start_pause_clicked {
            self.shell.on_start_pause();
        }
        if reset_clicked {
            self.shell.on_reset();
        }
    }

    fn show_display(&self, ui: &mut egui::Ui) {
        let display = self.shell.display();
        let font = FontId::monospace(self.shell.font_size() as f32);
        let mut text = RichText::new(display.text.as_str()).font(font);
        if let Some(color) = display.color.color32() {
            text = text.color(color);
        }
        ui.centered_and_justified(|ui| {
            ui.label(text);
        });
    }
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.shell.poll();

        TopBottomPanel::bottom("buttons")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                self.show_buttons(ui);
                ui.add_space(4.0);
            });

        egui::CentralPanel::default().show(ctx, |ui| self.show_display(ui));

        if let Some(wait) = self.shell.repaint_after() {
            ctx.request_repaint_after(wait);
        }
    }
}

fn apply_window_command(ctx: &egui::Context, command: WindowCommand) {
    debug!("Window command: {}", command);
    match command {
        WindowCommand::SetFullscreen(fullscreen) => {
            ctx.send_viewport_cmd(ViewportCommand::Fullscreen(fullscreen));
        }
    }
}

/// Opens the timer window and runs the event loop until it is closed.
///
/// # Errors
///
/// Returns an error if the window or graphics context cannot be created.
pub fn run_gui(config: TimerConfig, sounds: Box<dyn SoundPlayer>) -> Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(DEFAULT_WINDOW_SIZE),
        ..Default::default()
    };

    info!(
        "Opening window: start={}s limit={}s",
        config.start_seconds, config.limit_seconds
    );
    let app = CountdownApp::new(config, sounds);

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|err| anyhow::anyhow!("failed to open timer window: {err}"))?;

    Ok(())
}
