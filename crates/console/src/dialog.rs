//! Confirmation dialog port.
//!
//! Opening a dialog and acting on its outcome are separate steps: the
//! dialog only shows the prompt, and the caller reports the user's decision
//! back to whoever opened it.

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::error::{ConsoleError, ConsoleResult};

/// Styling of the confirm button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OkType {
    Primary,
    /// Destructive action.
    Danger,
}

/// Copy and layout of a confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmOptions {
    pub title: String,
    pub content: String,
    pub ok_text: String,
    pub cancel_text: String,
    pub ok_type: OkType,
    pub centered: bool,
}

impl ConfirmOptions {
    /// The fixed logout prompt.
    pub fn logout() -> Self {
        Self {
            title: "Confirm Logout".to_string(),
            content: "Are you sure you want to logout?".to_string(),
            ok_text: "Logout".to_string(),
            cancel_text: "Cancel".to_string(),
            ok_type: OkType::Danger,
            centered: true,
        }
    }
}

/// The user's answer to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirm,
    Cancel,
}

/// Modal confirmation primitive.
pub trait ConfirmDialog {
    /// Show the prompt. The decision is delivered separately.
    fn open(&mut self, options: &ConfirmOptions) -> ConsoleResult<()>;
}

impl<D: ConfirmDialog + ?Sized> ConfirmDialog for &mut D {
    fn open(&mut self, options: &ConfirmOptions) -> ConsoleResult<()> {
        (**self).open(options)
    }
}

/// Line-oriented dialog for terminals.
///
/// `open` prints the prompt; [`TerminalDialog::read_decision`] reads the
/// answer. Only the confirm label (or `y`/`yes`) counts as confirmation.
pub struct TerminalDialog<R, W> {
    input: R,
    output: W,
    ok_text: String,
}

impl<R: BufRead, W: Write> TerminalDialog<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            ok_text: String::new(),
        }
    }

    /// Read one line of input and turn it into a decision.
    ///
    /// End of input counts as cancel.
    pub fn read_decision(&mut self) -> ConsoleResult<Decision> {
        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .map_err(|e| ConsoleError::Dialog(e.to_string()))?;

        let answer = line.trim();
        let confirmed = answer.eq_ignore_ascii_case("y")
            || answer.eq_ignore_ascii_case("yes")
            || (!self.ok_text.is_empty() && answer.eq_ignore_ascii_case(&self.ok_text));

        Ok(if confirmed {
            Decision::Confirm
        } else {
            Decision::Cancel
        })
    }
}

impl<R: BufRead, W: Write> ConfirmDialog for TerminalDialog<R, W> {
    fn open(&mut self, options: &ConfirmOptions) -> ConsoleResult<()> {
        self.ok_text = options.ok_text.clone();

        let prompt = format!(
            "{}\n{}\n[{}] / [{}]: ",
            options.title, options.content, options.ok_text, options.cancel_text
        );
        self.output
            .write_all(prompt.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(|e| ConsoleError::Dialog(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn logout_copy() {
        let options = ConfirmOptions::logout();
        assert_eq!(options.title, "Confirm Logout");
        assert_eq!(options.content, "Are you sure you want to logout?");
        assert_eq!(options.ok_text, "Logout");
        assert_eq!(options.cancel_text, "Cancel");
        assert_eq!(options.ok_type, OkType::Danger);
        assert!(options.centered);
    }

    #[test]
    fn terminal_dialog_prints_prompt() {
        let mut out = Vec::new();
        let mut dialog = TerminalDialog::new(&b""[..], &mut out);
        dialog.open(&ConfirmOptions::logout()).unwrap();
        drop(dialog);

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("Confirm Logout\n"));
        assert!(printed.contains("[Logout] / [Cancel]"));
    }

    #[test]
    fn terminal_dialog_decisions() {
        let cases = [
            ("y\n", Decision::Confirm),
            ("YES\n", Decision::Confirm),
            ("logout\n", Decision::Confirm),
            ("n\n", Decision::Cancel),
            ("\n", Decision::Cancel),
            ("", Decision::Cancel),
        ];

        for (input, expected) in cases {
            let mut dialog = TerminalDialog::new(input.as_bytes(), Vec::new());
            dialog.open(&ConfirmOptions::logout()).unwrap();
            assert_eq!(dialog.read_decision().unwrap(), expected, "input {input:?}");
        }
    }

    #[test]
    fn unreadable_answer_is_a_dialog_error() {
        let mut dialog = TerminalDialog::new(&[0xff, 0xfe, b'\n'][..], Vec::new());
        dialog.open(&ConfirmOptions::logout()).unwrap();

        let err = dialog.read_decision().unwrap_err();
        assert!(matches!(err, ConsoleError::Dialog(_)), "got {err:?}");
    }
}
