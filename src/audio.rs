//! Tone synthesis for collection and combat cues
//!
//! The game treats audio as an opaque collaborator: `play(note, seconds)`
//! with named pitches. The SDL2 implementation runs a single sine voice in
//! the audio callback with a short linear release so retriggered notes
//! don't click. When the audio device can't be opened the caller swaps in
//! `NullSynth` and the game carries on silently.

use sdl2::AudioSubsystem;
use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

/// Duration of an eighth-note cue at the game's fixed tempo
pub const EIGHTH_NOTE: f32 = 0.25;

/// Opaque tone player
pub trait ToneSynth {
    /// Plays a named pitch ("C4", "F#3", "Bb2") for `seconds`. Unknown
    /// names are logged and ignored.
    fn play(&mut self, note: &str, seconds: f32);
}

/// Resolves a note name to its frequency in Hz (A4 = 440, equal temperament)
///
/// Accepts a letter A-G, an optional `#` or `b`, and an octave number.
pub fn note_frequency(name: &str) -> Option<f32> {
    let mut chars = name.chars();
    let letter = chars.next()?;
    let base = match letter.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let rest: String = chars.collect();
    let (accidental, octave_str) = match rest.chars().next() {
        Some('#') => (1i32, &rest[1..]),
        Some('b') => (-1i32, &rest[1..]),
        _ => (0i32, rest.as_str()),
    };

    let octave: i32 = octave_str.parse().ok()?;

    // MIDI numbering: C4 = 60, A4 = 69
    let midi = (octave + 1) * 12 + base + accidental;
    Some(440.0 * 2.0_f32.powf((midi - 69) as f32 / 12.0))
}

/// One mono sine voice driven by the SDL2 audio callback
struct SineVoice {
    phase: f32,
    phase_step: f32,
    remaining: u32,
    release: u32,
    volume: f32,
}

impl AudioCallback for SineVoice {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            if self.remaining == 0 {
                *sample = 0.0;
                continue;
            }

            // Linear release over the last few ms avoids an audible click
            let envelope = if self.remaining < self.release {
                self.remaining as f32 / self.release as f32
            } else {
                1.0
            };

            *sample = (self.phase * std::f32::consts::TAU).sin() * self.volume * envelope;
            self.phase = (self.phase + self.phase_step) % 1.0;
            self.remaining -= 1;
        }
    }
}

/// SDL2-backed synth
pub struct SdlSynth {
    device: AudioDevice<SineVoice>,
    sample_rate: f32,
}

impl SdlSynth {
    pub fn new(audio: &AudioSubsystem) -> Result<Self, String> {
        let desired = AudioSpecDesired {
            freq: Some(44_100),
            channels: Some(1),
            samples: None,
        };

        let device = audio.open_playback(None, &desired, |spec| SineVoice {
            phase: 0.0,
            phase_step: 0.0,
            remaining: 0,
            release: (spec.freq / 50).max(1) as u32,
            volume: 0.2,
        })?;

        let sample_rate = device.spec().freq as f32;
        device.resume();

        Ok(SdlSynth {
            device,
            sample_rate,
        })
    }
}

impl ToneSynth for SdlSynth {
    fn play(&mut self, note: &str, seconds: f32) {
        let Some(freq) = note_frequency(note) else {
            log::warn!("ignoring unknown note '{}'", note);
            return;
        };

        let mut voice = self.device.lock();
        voice.phase = 0.0;
        voice.phase_step = freq / self.sample_rate;
        voice.remaining = (seconds * self.sample_rate) as u32;
    }
}

/// Silent fallback used when audio init fails
pub struct NullSynth;

impl ToneSynth for NullSynth {
    fn play(&mut self, _note: &str, _seconds: f32) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.05
    }

    #[test]
    fn test_reference_pitches() {
        assert_eq!(note_frequency("A4"), Some(440.0));
        assert!(close(note_frequency("C4").unwrap(), 261.63));
        assert!(close(note_frequency("E4").unwrap(), 329.63));
        assert!(close(note_frequency("G4").unwrap(), 392.00));
        assert!(close(note_frequency("B4").unwrap(), 493.88));
        assert!(close(note_frequency("C2").unwrap(), 65.41));
    }

    #[test]
    fn test_accidentals() {
        assert!(close(note_frequency("F#3").unwrap(), 185.0));
        // Bb3 and A#3 are the same pitch
        assert_eq!(note_frequency("Bb3"), note_frequency("A#3"));
    }

    #[test]
    fn test_lowercase_letter_accepted() {
        assert_eq!(note_frequency("a4"), Some(440.0));
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert_eq!(note_frequency(""), None);
        assert_eq!(note_frequency("H4"), None);
        assert_eq!(note_frequency("C"), None);
        assert_eq!(note_frequency("4C"), None);
    }
}
