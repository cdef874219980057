/// A discrete command delivered by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Command {
    MoveLeft,
    MoveRight,
    /// One gravity step, without a line check.
    SoftDrop,
    Rotate,
    /// Host control: suspend or resume gravity and piece commands.
    TogglePause,
    /// Host control: abandon the session.
    Quit,
}

impl Command {
    /// Maps a raw single-character command code.
    ///
    /// `q`/`d` move left/right, `s` soft-drops and a space rotates. Unknown codes
    /// return `None` and are meant to be ignored.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'q' => Some(Self::MoveLeft),
            'd' => Some(Self::MoveRight),
            's' => Some(Self::SoftDrop),
            ' ' => Some(Self::Rotate),
            'p' => Some(Self::TogglePause),
            _ => None,
        }
    }

    /// Returns whether the command acts on the falling piece.
    #[must_use]
    pub fn is_piece_command(self) -> bool {
        matches!(
            self,
            Self::MoveLeft | Self::MoveRight | Self::SoftDrop | Self::Rotate
        )
    }
}
