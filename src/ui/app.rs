use std::io;

use tokio::runtime::Handle;

use crate::ui::presenter::Presenter;
use crate::ui::users::{RenderMode, UserListController};

/// Rows one user card takes in the list (name, email, city, contact, gap).
pub const CARD_HEIGHT: u16 = 5;

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Terminal adapter state: the last presented mode plus view-only bits.
pub struct App {
    should_quit: bool,
    mode: RenderMode,
    scroll: u16,
    viewport_height: u16,
    tick: u64,
    controller: UserListController,
    runtime: Handle,
}

impl App {
    pub fn new(controller: UserListController, runtime: Handle) -> Self {
        Self {
            should_quit: false,
            mode: controller.render_mode(),
            scroll: 0,
            viewport_height: 0,
            tick: 0,
            controller,
            runtime,
        }
    }

    pub fn mode(&self) -> &RenderMode {
        &self.mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn on_resize(&mut self, rows: u16) {
        self.viewport_height = rows;
        self.clamp_scroll();
    }

    pub fn spinner_frame(&self) -> char {
        SPINNER[(self.tick % SPINNER.len() as u64) as usize]
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll
    }

    pub fn page_size(&self) -> u16 {
        self.viewport_height.max(1)
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll).saturating_add(delta).max(0);
        self.scroll = u16::try_from(next).unwrap_or(u16::MAX);
        self.clamp_scroll();
    }

    /// Runs on the Tokio runtime; the new mode arrives through the
    /// controller listener.
    pub fn request_refresh(&self) {
        let controller = self.controller.clone();
        self.runtime.spawn(async move {
            controller.refresh().await;
        });
    }

    pub fn simulate_error(&self) {
        self.controller.simulate_default_error();
    }

    pub fn dismiss_simulated_error(&self) {
        self.controller.dismiss_simulated_error();
    }

    fn max_scroll(&self) -> u16 {
        let count = u16::try_from(self.mode.users().len()).unwrap_or(u16::MAX);
        count.saturating_mul(CARD_HEIGHT).saturating_sub(self.viewport_height)
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }
}

impl Presenter for App {
    fn present(&mut self, mode: &RenderMode) -> io::Result<()> {
        if !matches!(mode, RenderMode::Success { .. }) {
            self.scroll = 0;
        }
        self.mode = mode.clone();
        self.clamp_scroll();
        Ok(())
    }
}
