//! Plain text adapter: one block of lines per render mode.

use std::io::{self, Write};

use tokio::sync::mpsc;

use crate::ui::copy;
use crate::ui::presenter::Presenter;
use crate::ui::users::{RenderAction, RenderMode, UserListController};

pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present(&mut self, mode: &RenderMode) -> io::Result<()> {
        for line in render_lines(mode) {
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

fn action_label(action: RenderAction, mode: &RenderMode) -> &'static str {
    match (action, mode) {
        (RenderAction::Refresh, RenderMode::RealError { .. }) => copy::ACTION_RETRY,
        (RenderAction::Refresh, _) => copy::ACTION_REFRESH,
        (RenderAction::SimulateError, _) => copy::ACTION_SIMULATE_ERROR,
        (RenderAction::DismissSimulatedError, _) => copy::ACTION_DISMISS,
    }
}

/// Text lines for `mode`, without trailing separator.
pub fn render_lines(mode: &RenderMode) -> Vec<String> {
    let actions = mode
        .actions()
        .iter()
        .map(|action| format!("[{}]", action_label(*action, mode)))
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = Vec::new();
    match mode {
        RenderMode::SimulatedError { message } | RenderMode::RealError { message } => {
            lines.push(copy::ERROR_TITLE.to_string());
            lines.push(message.clone());
            lines.push(actions);
        }
        RenderMode::Loading => lines.push(copy::LOADING.to_string()),
        RenderMode::Empty => lines.push(copy::EMPTY.to_string()),
        RenderMode::Success {
            users,
            show_success_banner,
            ..
        } => {
            lines.push(copy::title_with_count(users.len()));
            lines.push(actions);
            if *show_success_banner {
                lines.push(copy::SUCCESS_BANNER.to_string());
            }
            for user in users.iter() {
                lines.push(String::new());
                lines.push(user.name.clone());
                lines.push(user.email.clone());
                lines.push(user.address.city.clone());
            }
        }
    }
    lines
}

/// Mount `controller` and present every render mode until the first one
/// that is not `Loading`, which is returned.
pub async fn run_plain<P: Presenter>(
    controller: &UserListController,
    presenter: &mut P,
) -> io::Result<RenderMode> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let id = controller.subscribe(move |mode| {
        let _ = tx.send(mode.clone());
    });
    controller.mount();

    let outcome = follow_until_settled(controller.render_mode(), &mut rx, presenter).await;
    controller.unsubscribe(id);
    outcome
}

async fn follow_until_settled<P: Presenter>(
    mut mode: RenderMode,
    rx: &mut mpsc::UnboundedReceiver<RenderMode>,
    presenter: &mut P,
) -> io::Result<RenderMode> {
    let mut last: Option<RenderMode> = None;
    loop {
        if last.as_ref() != Some(&mode) {
            presenter.present(&mode)?;
        }
        if mode.is_settled() {
            return Ok(mode);
        }
        last = Some(mode);
        mode = rx
            .recv()
            .await
            .ok_or_else(|| io::Error::other("render mode stream closed"))?;
    }
}
