/// Vector-animation playback widget.
pub trait VectorAnimation {
    /// Start or resume playback.
    fn play(&mut self);
    /// Pause at the current frame.
    fn pause(&mut self);
    /// Jump back to the first frame.
    fn reset(&mut self);
}

/// Command sent to a [`VectorAnimation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VectorCommand {
    /// [`VectorAnimation::play`].
    Play,
    /// [`VectorAnimation::pause`].
    Pause,
    /// [`VectorAnimation::reset`].
    Reset,
}

/// Player that records commands instead of drawing, for tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingPlayer {
    commands: Vec<VectorCommand>,
}

impl RecordingPlayer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands in the order received.
    pub fn commands(&self) -> &[VectorCommand] {
        &self.commands
    }
}

impl VectorAnimation for RecordingPlayer {
    fn play(&mut self) {
        self.commands.push(VectorCommand::Play);
    }

    fn pause(&mut self) {
        self.commands.push(VectorCommand::Pause);
    }

    fn reset(&mut self) {
        self.commands.push(VectorCommand::Reset);
    }
}
