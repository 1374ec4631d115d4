//! Terminal toasts. Success in green, errors in red, written to stderr.

use crate::ports::NotificationSink;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{Write, stderr};

const SUCCESS_COLOR: Color = Color::Rgb {
    r: 0x0f,
    g: 0xf0,
    b: 0x8c,
};
const ERROR_COLOR: Color = Color::Rgb {
    r: 0xff,
    g: 0x4d,
    b: 0x4d,
};

/// Console notification sink. Write errors are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }

    fn toast(&self, color: Color, marker: &str, message: &str) {
        let mut out = stderr();
        let _ = out.execute(SetForegroundColor(color));
        let _ = out.execute(Print(format!("{marker} {message}\r\n")));
        let _ = out.execute(ResetColor);
        let _ = out.flush();
    }
}

impl NotificationSink for ConsoleNotifier {
    fn success(&self, message: &str) {
        self.toast(SUCCESS_COLOR, "✔", message);
    }

    fn error(&self, message: &str) {
        self.toast(ERROR_COLOR, "✖", message);
    }
}
