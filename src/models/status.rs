//! Shared status badge tone.

/// Visual tone of a status badge. Each domain status maps itself to a tone;
/// the badge component maps tones to colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Info,
    Warning,
    Success,
    Danger,
}
