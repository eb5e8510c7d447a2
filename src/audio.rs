//! Audio collaborator seam
//!
//! The sim emits `GameEvent`s; this module maps them to named cues and
//! keeps the background track running idempotently. Playback itself is
//! host-provided through `AudioBackend`; with no backend available the
//! game degrades to silence.

use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase};

/// Named one-shot cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Direction change committed
    SwimStroke,
    /// Air bubble collected
    BubbleCollect,
    /// Shark landed a bite
    SharkBite,
    /// Menu action
    MenuSelect,
    /// Health hit zero
    GameOver,
    /// Periodic background bubbling while playing
    AmbientBubble,
}

/// Looping background tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    OceanAmbient,
}

/// Playback surface implemented by the host.
pub trait AudioBackend {
    fn play(&mut self, cue: SoundCue, volume: f32);
    /// Whether the track is already running, so the director never
    /// restarts it mid-loop.
    fn music_playing(&self, track: MusicTrack) -> bool;
    fn play_music(&mut self, track: MusicTrack, volume: f32);
    fn stop_music(&mut self);
}

/// Silent placeholder backend; tracks music state so idempotence still
/// holds without a playback device.
#[derive(Debug, Default)]
pub struct NullAudio {
    music_on: bool,
}

impl AudioBackend for NullAudio {
    fn play(&mut self, cue: SoundCue, _volume: f32) {
        log::trace!("audio cue (muted backend): {cue:?}");
    }

    fn music_playing(&self, _track: MusicTrack) -> bool {
        self.music_on
    }

    fn play_music(&mut self, track: MusicTrack, _volume: f32) {
        log::debug!("music start (muted backend): {track:?}");
        self.music_on = true;
    }

    fn stop_music(&mut self) {
        self.music_on = false;
    }
}

/// Seconds between ambient bubble cues during play.
const AMBIENT_BUBBLE_INTERVAL: f32 = 6.5;

/// Maps sim events to cues and drives the ambient layer.
pub struct AudioDirector<B: AudioBackend> {
    backend: B,
    pub music_enabled: bool,
    pub sounds_enabled: bool,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    ambient_timer: f32,
}

impl<B: AudioBackend> AudioDirector<B> {
    pub fn new(backend: B, settings: &Settings) -> Self {
        Self {
            backend,
            music_enabled: settings.music_enabled,
            sounds_enabled: settings.sounds_enabled,
            master_volume: settings.master_volume,
            sfx_volume: settings.sfx_volume,
            music_volume: settings.music_volume,
            ambient_timer: 0.0,
        }
    }

    fn effective_sfx(&self) -> f32 {
        if self.sounds_enabled {
            self.master_volume * self.sfx_volume
        } else {
            0.0
        }
    }

    fn play(&mut self, cue: SoundCue) {
        let volume = self.effective_sfx();
        if volume <= 0.0 {
            return;
        }
        self.backend.play(cue, volume);
    }

    /// Forward one sim event to the backend.
    pub fn handle(&mut self, event: GameEvent) {
        let cue = match event {
            GameEvent::SwimStroke => SoundCue::SwimStroke,
            GameEvent::SharkBite(_) => SoundCue::SharkBite,
            GameEvent::BubbleCollected => SoundCue::BubbleCollect,
            GameEvent::MenuSelect => SoundCue::MenuSelect,
            GameEvent::GameOver => SoundCue::GameOver,
        };
        self.play(cue);
    }

    /// Keep the ocean track looping and the bubble ambience ticking.
    /// Call once per frame, any phase.
    pub fn update(&mut self, dt: f32, phase: GamePhase) {
        if self.music_enabled {
            if !self.backend.music_playing(MusicTrack::OceanAmbient) {
                self.backend
                    .play_music(MusicTrack::OceanAmbient, self.master_volume * self.music_volume);
            }
        } else {
            self.backend.stop_music();
        }

        if phase == GamePhase::Playing {
            self.ambient_timer += dt;
            if self.ambient_timer >= AMBIENT_BUBBLE_INTERVAL {
                self.ambient_timer = 0.0;
                self.play(SoundCue::AmbientBubble);
            }
        }
    }
}
