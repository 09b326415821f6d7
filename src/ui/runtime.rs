use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::layout::layout_regions;
use crate::ui::presenter::Presenter;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::users::UserListController;
use ratatui::layout::Rect;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the interactive terminal UI until the user quits.
///
/// Blocks the calling thread; call it from `spawn_blocking` or a plain
/// thread. `runtime` drives the controller's fetches and timers.
pub fn run(controller: UserListController, runtime: Handle, tick_rate: Duration) -> io::Result<()> {
    let _context = runtime.enter();
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    let sender = events.sender();
    let listener = controller.subscribe(move |mode| {
        let _ = sender.send(AppEvent::View(mode.clone()));
    });

    let mut app = App::new(controller.clone(), runtime.clone());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(body_height(cols, rows));
    }
    controller.mount();
    app.present(&controller.render_mode())?;

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => {
                handle_key(&mut app, key);
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(body_height(cols, rows)),
            Ok(AppEvent::View(mode)) => app.present(&mode)?,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    controller.unsubscribe(listener);
    drop(guard);
    Ok(())
}

fn body_height(cols: u16, rows: u16) -> u16 {
    let (_, body, _) = layout_regions(Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    });
    body.height
}
