// Modal confirmation dialog, the replacement for native confirm()/alert().
use anyhow::{Result, bail};
use tokio::sync::oneshot;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DialogFocus {
    Confirm,
    Cancel,
}

/// What the renderer needs to draw the prompt.
pub struct DialogView {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    /// None renders a single acknowledge button.
    pub cancel_label: Option<String>,
    pub focus: DialogFocus,
}

/// One modal prompt at a time: hidden -> waiting -> hidden.
///
/// The continuation is a single-slot oneshot sender. Opening while a
/// prompt is pending is an error and the new request is dropped; resolving
/// consumes the slot, so a second resolution is a no-op.
#[derive(Default)]
pub struct DialogController {
    view: Option<DialogView>,
    pending: Option<oneshot::Sender<bool>>,
}

impl DialogController {
    /// Open a prompt and hand back the receiver for its answer. Confirm
    /// resolves true, cancel (or Esc) false. A dropped controller surfaces
    /// as a receive error, which callers treat as cancel.
    pub fn confirm(
        &mut self,
        title: &str,
        message: &str,
        confirm_label: &str,
        cancel_label: Option<&str>,
    ) -> Result<oneshot::Receiver<bool>> {
        if self.pending.is_some() {
            bail!("A dialog is already waiting for an answer");
        }
        let (tx, rx) = oneshot::channel();
        self.view = Some(DialogView {
            title: title.to_string(),
            message: message.to_string(),
            confirm_label: confirm_label.to_string(),
            cancel_label: cancel_label.map(|s| s.to_string()),
            focus: DialogFocus::Confirm,
        });
        self.pending = Some(tx);
        Ok(rx)
    }

    /// Acknowledge-only prompt: one button, resolves true however it is
    /// closed. Callers ignore the answer.
    pub fn notice(&mut self, title: &str, message: &str) -> Result<oneshot::Receiver<bool>> {
        self.confirm(title, message, "Ok", None)
    }

    pub fn is_open(&self) -> bool {
        self.view.is_some()
    }

    pub fn view(&self) -> Option<&DialogView> {
        self.view.as_ref()
    }

    pub fn focus(&self) -> Option<DialogFocus> {
        self.view.as_ref().map(|v| v.focus)
    }

    /// Move focus between the two buttons; no-op without a cancel button.
    pub fn toggle_focus(&mut self) {
        if let Some(view) = &mut self.view
            && view.cancel_label.is_some()
        {
            view.focus = match view.focus {
                DialogFocus::Confirm => DialogFocus::Cancel,
                DialogFocus::Cancel => DialogFocus::Confirm,
            };
        }
    }

    /// Close the prompt and fulfil the continuation. Without a cancel
    /// button the answer is forced to true.
    pub fn resolve(&mut self, confirmed: bool) {
        let answer = match &self.view {
            Some(view) if view.cancel_label.is_none() => true,
            _ => confirmed,
        };
        self.view = None;
        if let Some(tx) = self.pending.take() {
            let _ = tx.send(answer);
        }
    }

    /// Resolve according to the currently focused button.
    pub fn activate(&mut self) {
        let confirmed = matches!(self.focus(), Some(DialogFocus::Confirm));
        self.resolve(confirmed);
    }
}
