//! Headless view controller.
//!
//! `ViewShell` is everything the window does except drawing: it owns the
//! engine, turns button clicks and key presses into engine operations or
//! window commands, drains engine events into display state and sound cues,
//! and tracks the font size for the current window geometry.
//!
//! Sound paths are checked when a cue fires, so a clip added or removed
//! while the window is open is picked up.

use std::path::Path;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver};
use eframe::egui::{Key, Modifiers};
use tracing::{debug, warn};

use super::controls::{is_fullscreen_chord, StartPauseButton, WindowCommand};
use super::display::DisplayState;
use super::font::font_point_size;
use super::DEFAULT_WINDOW_SIZE;
use crate::sound::{SoundPlayer, SoundSource};
use crate::timer::{Clock, SystemClock, TimerEngine, TimerEvent, TICK_INTERVAL};
use crate::types::{TimerConfig, TimerPhase};

/// View state and input routing for one timer window.
pub struct ViewShell<C: Clock = SystemClock, P: SoundPlayer = Box<dyn SoundPlayer>> {
    /// The countdown engine, owned by value
    engine: TimerEngine<C>,
    /// Receiving end of the engine's event channel
    events: Receiver<TimerEvent>,
    /// Sound output
    sounds: P,
    /// Last rendered value
    display: DisplayState,
    /// Last known window size in points
    window_size: (f32, f32),
    /// Display font size for `window_size`
    font_size: u32,
    /// Whether the window is fullscreen
    fullscreen: bool,
}

impl<C: Clock, P: SoundPlayer> ViewShell<C, P> {
    /// Builds the shell and its engine from a loaded configuration.
    pub fn new(config: TimerConfig, clock: C, sounds: P) -> Self {
        let (tx, rx) = unbounded();
        let engine = TimerEngine::new(config, clock, tx);
        let [width, height] = DEFAULT_WINDOW_SIZE;

        let mut shell = Self {
            display: DisplayState::from_ms(engine.current_ms()),
            engine,
            events: rx,
            sounds,
            window_size: (width, height),
            font_size: font_point_size(width, height),
            fullscreen: false,
        };
        shell.dispatch_events();
        shell
    }

    // ------------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------------

    /// Handles a click on the Start/Pause button.
    pub fn on_start_pause(&mut self) {
        self.engine.start_or_pause();
        self.dispatch_events();
    }

    /// Handles a click on the Reset button.
    ///
    /// Silences any cue still sounding and recomputes the font size.
    pub fn on_reset(&mut self) {
        self.sounds.stop();
        self.engine.reset();
        self.dispatch_events();
        let (width, height) = self.window_size;
        self.font_size = font_point_size(width, height);
    }

    /// Records a new window size and recomputes the font size.
    ///
    /// Returns true if the font size changed.
    pub fn on_resize(&mut self, width: f32, height: f32) -> bool {
        self.window_size = (width, height);
        let size = font_point_size(width, height);
        if size == self.font_size {
            return false;
        }
        debug!("Window {}x{}: font size {} -> {}", width, height, self.font_size, size);
        self.font_size = size;
        true
    }

    /// Handles a key press; only Alt+Enter does anything.
    pub fn on_key(&mut self, key: Key, modifiers: Modifiers) -> Option<WindowCommand> {
        if !is_fullscreen_chord(key, modifiers) {
            return None;
        }
        self.fullscreen = !self.fullscreen;
        let command = WindowCommand::SetFullscreen(self.fullscreen);
        debug!("Alt+Enter: {}", command);
        Some(command)
    }

    /// Adopts the fullscreen state reported by the window system.
    ///
    /// Keeps the toggle in step when fullscreen is left by other means.
    pub fn sync_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    // ------------------------------------------------------------------------
    // Event loop
    // ------------------------------------------------------------------------

    /// Ticks the engine if it is running and dispatches its events.
    ///
    /// Called once per frame; the frame rate while Running is
    /// [`TICK_INTERVAL`].
    pub fn poll(&mut self) {
        if self.engine.phase().is_running() {
            self.engine.tick();
        }
        self.dispatch_events();
    }

    fn dispatch_events(&mut self) {
        let events: Vec<TimerEvent> = self.events.try_iter().collect();
        for event in events {
            match event {
                TimerEvent::DisplayChanged { current_ms } => {
                    self.display = DisplayState::from_ms(current_ms);
                }
                TimerEvent::ZeroCrossed => {
                    self.play_cue(self.engine.config().sound_zero_path.as_deref())
                }
                TimerEvent::LimitReached => {
                    self.play_cue(self.engine.config().sound_limit_path.as_deref())
                }
                TimerEvent::PhaseChanged { phase } => {
                    debug!("Phase changed to {}", phase.as_str());
                }
            }
        }
    }

    /// Plays the clip at `path`, checked now rather than at startup.
    fn play_cue(&self, path: Option<&Path>) {
        let source = SoundSource::resolve(path);
        if let Err(e) = self.sounds.play(&source) {
            warn!("Could not play {}: {}", source.name(), e);
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Returns the text and colour to draw.
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Returns the Start/Pause button state.
    pub fn start_pause_button(&self) -> StartPauseButton {
        StartPauseButton::for_phase(self.engine.phase())
    }

    /// Returns the display font size in points.
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Returns true if the window should be fullscreen.
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Returns the engine phase.
    pub fn phase(&self) -> TimerPhase {
        self.engine.phase()
    }

    /// Returns how soon the next frame is needed, if at all.
    pub fn repaint_after(&self) -> Option<Duration> {
        self.engine.phase().is_running().then_some(TICK_INTERVAL)
    }

    /// Returns the sound player.
    pub fn sounds(&self) -> &P {
        &self.sounds
    }
}
