//! Console progress rendering.
//!
//! Purely presentational: the reporter knows the step names and renders
//! the strip of done/active/pending markers around each step. Output
//! errors on the decorative path are deliberately ignored; if stdout is
//! a broken pipe the run should continue, not crash.

use std::io::Write;
use termcolor::{Buffer, BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Renders pipeline progress to the terminal.
pub struct Reporter {
    writer: BufferWriter,
    steps: Vec<String>,
}

impl Reporter {
    pub fn new(steps: Vec<String>) -> Self {
        Self {
            writer: BufferWriter::stdout(ColorChoice::Auto),
            steps,
        }
    }

    /// Prints the run header: project name and step count.
    pub fn header(&self, project: &str) {
        let mut buffer = self.writer.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_bold(true));
        let _ = writeln!(
            buffer,
            "Packaging {} ({} step{})",
            project,
            self.steps.len(),
            if self.steps.len() == 1 { "" } else { "s" }
        );
        let _ = buffer.reset();
        let _ = self.writer.print(&buffer);
    }

    /// Renders the strip with step `index` active, then the step line.
    pub fn step_started(&self, index: usize) {
        let mut buffer = self.writer.buffer();
        self.render_strip(&mut buffer, index);
        let _ = writeln!(
            buffer,
            "  step {}/{}: {}",
            index + 1,
            self.steps.len(),
            self.steps[index]
        );
        let _ = self.writer.print(&buffer);
    }

    /// Marks the failing step; the cause is printed by the caller.
    pub fn step_failed(&self, index: usize) {
        let mut buffer = self.writer.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = writeln!(
            buffer,
            "✗ step {}/{} '{}' failed",
            index + 1,
            self.steps.len(),
            self.steps[index]
        );
        let _ = buffer.reset();
        let _ = self.writer.print(&buffer);
    }

    /// Renders the all-done strip and the completion line.
    pub fn finished(&self) {
        let mut buffer = self.writer.buffer();
        self.render_strip(&mut buffer, self.steps.len());
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
        let _ = writeln!(buffer, "✓ All {} steps complete", self.steps.len());
        let _ = buffer.reset();
        let _ = self.writer.print(&buffer);
    }

    /// One line of status glyphs: done, active, pending.
    fn render_strip(&self, buffer: &mut Buffer, current: usize) {
        for (i, name) in self.steps.iter().enumerate() {
            let (glyph, spec) = if i < current {
                ("✓", ColorSpec::new().set_fg(Some(Color::Green)).clone())
            } else if i == current {
                ("◉", ColorSpec::new().set_fg(Some(Color::Cyan)).clone())
            } else {
                ("○", ColorSpec::new().set_dimmed(true).clone())
            };
            let _ = buffer.set_color(&spec);
            let _ = write!(buffer, "{glyph} {name}");
            let _ = buffer.reset();
            if i + 1 < self.steps.len() {
                let _ = write!(buffer, "  ");
            }
        }
        let _ = writeln!(buffer);
    }
}
