use std::io::{self, Write};

/// One-shot sound effects, keyed by the names of the bundled audio assets.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SoundCue {
    /// Apple eaten.
    Ding,
    /// Collision, game over.
    Bounce,
    /// High score broken for the first time this run.
    BonusPoints,
    /// Game-over screen for a record-breaking run.
    GoodResult,
}

impl SoundCue {
    /// Asset name of this cue, without directory or extension.
    #[must_use]
    pub fn resource_name(self) -> &'static str {
        match self {
            Self::Ding => "ding",
            Self::Bounce => "bounce",
            Self::BonusPoints => "bonus-points",
            Self::GoodResult => "good-result",
        }
    }
}

/// Output seam for sound effects and background music control.
///
/// The control loop drives this on every cue and on pause/resume; which
/// sounds actually come out depends on the implementation.
pub trait Audio {
    /// Plays one sound effect.
    fn play_cue(&mut self, cue: SoundCue);

    /// Pauses the background track.
    fn pause_music(&mut self) {}

    /// Starts or resumes the background track.
    fn resume_music(&mut self) {}
}

/// Plays nothing. Selected with `--mute`.
#[derive(Debug, Default)]
pub struct Silent;

impl Audio for Silent {
    fn play_cue(&mut self, _cue: SoundCue) {}
}

/// Rings the terminal bell for every cue.
///
/// Music control is a no-op; a terminal has no mixer.
#[derive(Debug, Default)]
pub struct Bell;

impl Audio for Bell {
    fn play_cue(&mut self, _cue: SoundCue) {
        let mut stdout = io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::SoundCue;

    #[test]
    fn cue_resource_names_match_bundled_assets() {
        assert_eq!(SoundCue::Ding.resource_name(), "ding");
        assert_eq!(SoundCue::Bounce.resource_name(), "bounce");
        assert_eq!(SoundCue::BonusPoints.resource_name(), "bonus-points");
        assert_eq!(SoundCue::GoodResult.resource_name(), "good-result");
    }
}
