use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

use crate::ui::users::RenderMode;

pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// The controller derived a new render mode.
    View(RenderMode),
}

/// Merges terminal input, ticks and controller notifications into one queue.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));

        let input_tx = tx.clone();
        let input_stop = Arc::clone(&stop);
        thread::spawn(move || {
            while !input_stop.load(Ordering::Relaxed) {
                let next = match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => Some(AppEvent::Input(key)),
                        Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                        Ok(_) => None,
                        Err(err) => {
                            tracing::warn!(error = %err, "Terminal input read failed");
                            break;
                        }
                    },
                    Ok(false) => Some(AppEvent::Tick),
                    Err(err) => {
                        tracing::warn!(error = %err, "Terminal input poll failed");
                        break;
                    }
                };
                if let Some(event) = next {
                    if input_tx.send(event).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx, tx, stop }
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
