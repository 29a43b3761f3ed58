/// Run outcome determining exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every document was dispatched and written (exit 0).
    Success,
    /// Bad input or an output failure (exit 2).
    Refusal,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::Refusal => 2,
        }
    }
}
