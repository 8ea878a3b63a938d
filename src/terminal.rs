//! Show one line at a time, erasing the previous one.

use std::io::Write;

use crate::error::MajorResult;
use crate::quiz::Prompter;

const CURSOR_UP: &str = "\x1b[1A";
const CLEAR_LINE: &str = "\x1b[2K\r";

#[derive(Debug, Default)]
pub struct LineRepeater {
    max_line: usize,
}

impl LineRepeater {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `msg` until the user presses enter, then wipe it.
    ///
    /// Shorter lines are padded to the longest one shown so far. Returns
    /// `false` if the user quit instead.
    pub fn write<P, W>(&mut self, prompter: &mut P, out: &mut W, msg: &str) -> MajorResult<bool>
    where
        P: Prompter + ?Sized,
        W: Write + ?Sized,
    {
        let width = msg.chars().count();
        let shown = if width >= self.max_line {
            self.max_line = width;
            msg.to_string()
        } else {
            format!("{:<pad$}", msg, pad = self.max_line)
        };

        let answered = prompter.ask(&shown)?.is_some();
        write!(out, "{}{}", CURSOR_UP, CLEAR_LINE)?;
        out.flush()?;
        Ok(answered)
    }
}
