/// A scroll request sent to the host's horizontal pager.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollCommand {
    /// Target horizontal content offset in points.
    pub x: f64,
    /// Whether the host should animate to `x`.
    pub animated: bool,
}

/// Host view that can scroll the carousel pager.
pub trait ScrollHost {
    /// Scroll the pager to horizontal offset `x`.
    fn scroll_to(&mut self, x: f64, animated: bool);
}

/// Scroll host that records every command, for tests and the CLI.
#[derive(Debug, Default)]
pub struct ScrollLog {
    commands: Vec<ScrollCommand>,
}

impl ScrollLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands in the order they were issued.
    pub fn commands(&self) -> &[ScrollCommand] {
        &self.commands
    }

    /// Most recent command, if any.
    pub fn last(&self) -> Option<ScrollCommand> {
        self.commands.last().copied()
    }
}

impl ScrollHost for ScrollLog {
    fn scroll_to(&mut self, x: f64, animated: bool) {
        self.commands.push(ScrollCommand { x, animated });
    }
}
