use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing {
        chapter: u16,
    },
    Paused {
        chapter: u16,
    },
}

impl PlaybackState {
    pub fn is_playing(&self, chapter: u16) -> bool {
        matches!(self, PlaybackState::Playing { chapter: current } if *current == chapter)
    }
}

/// Chapter recitation playback. Decoding and output live behind this trait.
pub trait AudioControl {
    fn play_chapter(&mut self, chapter: u16);
    fn pause(&mut self);
    fn resume(&mut self);
    fn state(&self) -> PlaybackState;

    /// Play control behavior: pause while this chapter plays, resume it when
    /// paused, otherwise start it from the beginning.
    fn toggle_chapter(&mut self, chapter: u16) {
        match self.state() {
            PlaybackState::Playing { chapter: current } if current == chapter => self.pause(),
            PlaybackState::Paused { chapter: current } if current == chapter => self.resume(),
            _ => self.play_chapter(chapter),
        }
    }
}

/// Tracks playback state without producing sound.
#[derive(Debug, Default)]
pub struct SilentPlayer {
    state: PlaybackState,
}

impl SilentPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioControl for SilentPlayer {
    fn play_chapter(&mut self, chapter: u16) {
        info!("Playing chapter {}", chapter);
        self.state = PlaybackState::Playing { chapter };
    }

    fn pause(&mut self) {
        if let PlaybackState::Playing { chapter } = self.state {
            info!("Paused chapter {}", chapter);
            self.state = PlaybackState::Paused { chapter };
        }
    }

    fn resume(&mut self) {
        if let PlaybackState::Paused { chapter } = self.state {
            info!("Resumed chapter {}", chapter);
            self.state = PlaybackState::Playing { chapter };
        }
    }

    fn state(&self) -> PlaybackState {
        self.state
    }
}
