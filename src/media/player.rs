//! Playback state management for pulpit
//!
//! This module models the transport controls of a single media element:
//! play/pause, seeking, volume and mute, and the derived display state
//! (elapsed/duration clock, percentage progress). The physical sink is
//! external; its callbacks arrive here as explicit transition handlers.

use crate::media::MediaItem;
use crate::utils::{format_playback_clock, parse_clock_string};
use log::debug;

/// Transport state of one media element
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Whether playback is running
    pub is_playing: bool,
    /// Current position in seconds
    pub position_seconds: f64,
    /// Total duration in seconds, 0 until metadata arrives
    pub duration_seconds: f64,
    /// Output volume in [0, 1], preserved under mute
    pub volume: f64,
    /// Whether output is muted
    pub is_muted: bool,
    /// Percentage progress in [0, 100]
    pub progress_percent: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_playing: false,
            position_seconds: 0.0,
            duration_seconds: 0.0,
            volume: 1.0,
            is_muted: false,
            progress_percent: 0.0,
        }
    }
}

/// Wraps a single playable media resource and its transport state
#[derive(Debug, Clone, Default)]
pub struct MediaPlayer {
    item: Option<MediaItem>,
    state: PlaybackState,
}

impl MediaPlayer {
    /// Creates a player with nothing loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the player to an item, resetting all transport state
    ///
    /// If the item carries a parseable duration it is applied
    /// immediately, standing in for the metadata callback.
    pub fn load(&mut self, item: MediaItem) {
        debug!("Loading media item '{}'", item.title);
        self.state = PlaybackState::default();
        let known_duration = item
            .duration
            .as_deref()
            .map(parse_clock_string)
            .filter(|&secs| secs > 0.0);
        self.item = Some(item);
        if let Some(duration) = known_duration {
            self.on_metadata(duration);
        }
    }

    /// Returns the loaded item, if any
    pub fn item(&self) -> Option<&MediaItem> {
        self.item.as_ref()
    }

    /// Returns the current transport state
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Handles metadata availability, fixing the duration
    pub fn on_metadata(&mut self, duration_seconds: f64) {
        self.state.duration_seconds = duration_seconds.max(0.0);
        self.refresh_progress();
    }

    /// Handles a position update from the sink
    pub fn on_time_update(&mut self, position_seconds: f64) {
        self.state.position_seconds = position_seconds.max(0.0);
        self.refresh_progress();
    }

    /// Handles end of media: playback stops and progress pins to 100%
    pub fn on_ended(&mut self) {
        self.state.is_playing = false;
        self.state.position_seconds = self.state.duration_seconds;
        self.state.progress_percent = 100.0;
    }

    /// Flips between playing and paused
    ///
    /// Returns the new playing state. Has no effect until an item is
    /// loaded.
    pub fn toggle_play(&mut self) -> bool {
        if self.item.is_some() {
            self.state.is_playing = !self.state.is_playing;
        }
        self.state.is_playing
    }

    /// Seeks to a fractional position along the track
    ///
    /// The fraction is clamped to [0, 1] and mapped to
    /// `fraction x duration`.
    pub fn seek(&mut self, fraction: f64) {
        let fraction = fraction.clamp(0.0, 1.0);
        self.state.position_seconds = fraction * self.state.duration_seconds;
        self.refresh_progress();
    }

    /// Sets the output volume, clamped to [0, 1]
    ///
    /// Muting is independent of the stored volume.
    pub fn set_volume(&mut self, volume: f64) {
        self.state.volume = volume.clamp(0.0, 1.0);
    }

    /// Flips the mute state, leaving the stored volume untouched
    pub fn toggle_mute(&mut self) {
        self.state.is_muted = !self.state.is_muted;
    }

    /// Returns the volume the sink should output right now
    pub fn effective_volume(&self) -> f64 {
        if self.state.is_muted {
            0.0
        } else {
            self.state.volume
        }
    }

    /// Advances playback by the given wall-clock elapsed time
    ///
    /// This is the tick driver the event loop calls in place of a real
    /// sink: it feeds `on_time_update` while playing and raises
    /// `on_ended` when the known duration is reached.
    pub fn advance(&mut self, elapsed_seconds: f64) {
        if !self.state.is_playing || elapsed_seconds <= 0.0 {
            return;
        }
        let next = self.state.position_seconds + elapsed_seconds;
        if self.state.duration_seconds > 0.0 && next >= self.state.duration_seconds {
            self.on_ended();
        } else {
            self.on_time_update(next);
        }
    }

    /// Returns the `elapsed / duration` clock line for display
    pub fn clock(&self) -> String {
        format!(
            "{} / {}",
            format_playback_clock(self.state.position_seconds),
            format_playback_clock(self.state.duration_seconds)
        )
    }

    fn refresh_progress(&mut self) {
        self.state.progress_percent = if self.state.duration_seconds > 0.0 {
            (self.state.position_seconds / self.state.duration_seconds * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;

    fn audio_item(duration: &str) -> MediaItem {
        MediaItem {
            kind: MediaKind::Audio,
            title: "The Foundation of Faith".to_string(),
            attribution: "Pastor Michael Brown".to_string(),
            date: "December 15, 2024".to_string(),
            url: "http://localhost:5000/uploads/audios/foundation.mp3".to_string(),
            thumbnail: None,
            duration: Some(duration.to_string()),
        }
    }

    #[test]
    fn test_load_applies_known_duration() {
        let mut player = MediaPlayer::new();
        player.load(audio_item("45:30"));
        assert_eq!(player.state().duration_seconds, 2730.0);
        assert!(!player.state().is_playing);
    }

    #[test]
    fn test_load_resets_previous_state() {
        let mut player = MediaPlayer::new();
        player.load(audio_item("45:30"));
        player.toggle_play();
        player.set_volume(0.3);
        player.load(audio_item("38:15"));
        assert!(!player.state().is_playing);
        assert_eq!(player.state().volume, 1.0);
        assert_eq!(player.state().position_seconds, 0.0);
    }

    #[test]
    fn test_set_volume_round_trip() {
        let mut player = MediaPlayer::new();
        player.load(audio_item("45:30"));
        for v in [0.0, 0.1, 0.5, 0.9, 1.0] {
            player.set_volume(v);
            assert_eq!(player.state().volume, v);
        }
        player.set_volume(1.7);
        assert_eq!(player.state().volume, 1.0);
        player.set_volume(-0.2);
        assert_eq!(player.state().volume, 0.0);
    }

    #[test]
    fn test_mute_preserves_volume() {
        let mut player = MediaPlayer::new();
        player.load(audio_item("45:30"));
        player.set_volume(0.6);
        player.toggle_mute();
        assert!(player.state().is_muted);
        assert_eq!(player.state().volume, 0.6);
        assert_eq!(player.effective_volume(), 0.0);
        player.toggle_mute();
        assert!(!player.state().is_muted);
        assert_eq!(player.state().volume, 0.6);
        assert_eq!(player.effective_volume(), 0.6);
    }

    #[test]
    fn test_seek_boundaries() {
        let mut player = MediaPlayer::new();
        player.load(audio_item("45:30"));
        player.seek(0.0);
        assert_eq!(player.state().position_seconds, 0.0);
        player.seek(1.0);
        assert_eq!(player.state().position_seconds, 2730.0);
        player.seek(0.5);
        assert!((player.state().position_seconds - 1365.0).abs() < 1e-9);
        assert!((player.state().progress_percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_seek_clamps_out_of_range() {
        let mut player = MediaPlayer::new();
        player.load(audio_item("45:30"));
        player.seek(1.5);
        assert_eq!(player.state().position_seconds, 2730.0);
        player.seek(-0.5);
        assert_eq!(player.state().position_seconds, 0.0);
    }

    #[test]
    fn test_toggle_play_requires_item() {
        let mut player = MediaPlayer::new();
        assert!(!player.toggle_play());
        player.load(audio_item("45:30"));
        assert!(player.toggle_play());
        assert!(!player.toggle_play());
    }

    #[test]
    fn test_ended_stops_and_pins_progress() {
        let mut player = MediaPlayer::new();
        player.load(audio_item("45:30"));
        player.toggle_play();
        player.on_time_update(2000.0);
        player.on_ended();
        assert!(!player.state().is_playing);
        assert_eq!(player.state().progress_percent, 100.0);
        assert_eq!(player.state().position_seconds, 2730.0);
    }

    #[test]
    fn test_advance_reaches_end() {
        let mut player = MediaPlayer::new();
        player.load(audio_item("0:10"));
        player.toggle_play();
        player.advance(4.0);
        assert!(player.state().is_playing);
        assert_eq!(player.state().position_seconds, 4.0);
        player.advance(7.0);
        assert!(!player.state().is_playing);
        assert_eq!(player.state().progress_percent, 100.0);
    }

    #[test]
    fn test_advance_ignored_while_paused() {
        let mut player = MediaPlayer::new();
        player.load(audio_item("0:10"));
        player.advance(5.0);
        assert_eq!(player.state().position_seconds, 0.0);
    }

    #[test]
    fn test_clock_display() {
        let mut player = MediaPlayer::new();
        player.load(audio_item("45:30"));
        player.on_time_update(125.7);
        assert_eq!(player.clock(), "2:05 / 45:30");
    }
}
