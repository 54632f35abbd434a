//! Tone synthesis
//!
//! The games treat audio as an opaque capability: a note name goes in,
//! nothing comes back. The browser implementation builds a small Web Audio
//! graph per note (procedural, no sample files); native builds get a null
//! sink.

use serde::{Deserialize, Serialize};

/// One octave of playable notes, C4 through C5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Note {
    C4,
    Cs4,
    D4,
    Ds4,
    E4,
    F4,
    Fs4,
    G4,
    Gs4,
    A4,
    As4,
    B4,
    C5,
}

impl Note {
    /// Full chromatic alphabet, low to high.
    pub const ALL: [Note; 13] = [
        Note::C4,
        Note::Cs4,
        Note::D4,
        Note::Ds4,
        Note::E4,
        Note::F4,
        Note::Fs4,
        Note::G4,
        Note::Gs4,
        Note::A4,
        Note::As4,
        Note::B4,
        Note::C5,
    ];

    /// White keys only.
    pub const WHITE: [Note; 8] = [
        Note::C4,
        Note::D4,
        Note::E4,
        Note::F4,
        Note::G4,
        Note::A4,
        Note::B4,
        Note::C5,
    ];

    /// Equal-temperament frequency in Hz.
    pub fn frequency(self) -> f32 {
        match self {
            Note::C4 => 261.63,
            Note::Cs4 => 277.18,
            Note::D4 => 293.66,
            Note::Ds4 => 311.13,
            Note::E4 => 329.63,
            Note::F4 => 349.23,
            Note::Fs4 => 369.99,
            Note::G4 => 392.00,
            Note::Gs4 => 415.30,
            Note::A4 => 440.00,
            Note::As4 => 466.16,
            Note::B4 => 493.88,
            Note::C5 => 523.25,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Note::C4 => "C4",
            Note::Cs4 => "C#4",
            Note::D4 => "D4",
            Note::Ds4 => "D#4",
            Note::E4 => "E4",
            Note::F4 => "F4",
            Note::Fs4 => "F#4",
            Note::G4 => "G4",
            Note::Gs4 => "G#4",
            Note::A4 => "A4",
            Note::As4 => "A#4",
            Note::B4 => "B4",
            Note::C5 => "C5",
        }
    }
}

/// Fire-and-forget tone output. Playback failures are the sink's problem;
/// game logic never depends on them.
pub trait ToneSink {
    fn play(&mut self, note: Note);
}

/// Sink that discards everything. Native builds and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ToneSink for NullSink {
    fn play(&mut self, _note: Note) {}
}

/// Web Audio sink (WASM only).
///
/// Each note builds a fixed piano-like graph: a triangle foundation, a sine
/// body, an octave harmonic and a short hammer burst, all through a closing
/// low-pass filter into the master gain.
#[cfg(target_arch = "wasm32")]
pub struct WebAudioSink {
    ctx: Option<web_sys::AudioContext>,
    master_volume: f32,
}

#[cfg(target_arch = "wasm32")]
impl WebAudioSink {
    /// Note length in seconds.
    const NOTE_DURATION: f64 = 1.2;

    pub fn new(master_volume: f32) -> Self {
        let ctx = web_sys::AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            master_volume: master_volume.clamp(0.0, 1.0),
        }
    }

    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Resume audio context (required after user gesture).
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    fn build_note(
        ctx: &web_sys::AudioContext,
        freq: f32,
        vol: f32,
    ) -> Result<(), wasm_bindgen::JsValue> {
        use web_sys::{BiquadFilterType, OscillatorType};

        let now = ctx.current_time();
        let end = now + Self::NOTE_DURATION;

        let master = ctx.create_gain()?;
        let filter = ctx.create_biquad_filter()?;

        // Foundation: triangle for soft attack and body
        let osc = ctx.create_oscillator()?;
        osc.set_type(OscillatorType::Triangle);
        osc.frequency().set_value_at_time(freq, now)?;

        // Body: sine for pure fundamental
        let body = ctx.create_oscillator()?;
        body.set_type(OscillatorType::Sine);
        body.frequency().set_value_at_time(freq, now)?;
        let body_gain = ctx.create_gain()?;
        body_gain.gain().set_value_at_time(0.3, now)?;

        // Harmonic: octave above for twang
        let harmonic = ctx.create_oscillator()?;
        harmonic.set_type(OscillatorType::Sine);
        harmonic.frequency().set_value_at_time(freq * 2.0, now)?;
        let harmonic_gain = ctx.create_gain()?;
        harmonic_gain.gain().set_value_at_time(0.1, now)?;
        harmonic_gain
            .gain()
            .exponential_ramp_to_value_at_time(0.01, now + 0.3)?;

        // Hammer: high-frequency burst on the attack
        let hammer = ctx.create_oscillator()?;
        hammer.set_type(OscillatorType::Sine);
        hammer.frequency().set_value_at_time(freq * 4.0, now)?;
        let hammer_gain = ctx.create_gain()?;
        hammer_gain.gain().set_value_at_time(0.2, now)?;
        hammer_gain
            .gain()
            .exponential_ramp_to_value_at_time(0.001, now + 0.05)?;

        // Master envelope: fast attack, two-stage decay
        master.gain().set_value_at_time(0.0, now)?;
        master.gain().linear_ramp_to_value_at_time(0.5 * vol, now + 0.01)?;
        master
            .gain()
            .exponential_ramp_to_value_at_time((0.2 * vol).max(0.001), now + 0.2)?;
        master.gain().exponential_ramp_to_value_at_time(0.001, end)?;

        // Low-pass closes over the note
        filter.set_type(BiquadFilterType::Lowpass);
        filter.frequency().set_value_at_time(2000.0, now)?;
        filter.frequency().exponential_ramp_to_value_at_time(500.0, end)?;
        filter.q().set_value_at_time(1.0, now)?;

        osc.connect_with_audio_node(&filter)?;
        body.connect_with_audio_node(&body_gain)?;
        body_gain.connect_with_audio_node(&filter)?;
        harmonic.connect_with_audio_node(&harmonic_gain)?;
        harmonic_gain.connect_with_audio_node(&filter)?;
        hammer.connect_with_audio_node(&hammer_gain)?;
        hammer_gain.connect_with_audio_node(&filter)?;
        filter.connect_with_audio_node(&master)?;
        master.connect_with_audio_node(&ctx.destination())?;

        for node in [&osc, &body, &harmonic, &hammer] {
            node.start_with_when(now)?;
            node.stop_with_when(end)?;
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
impl ToneSink for WebAudioSink {
    fn play(&mut self, note: Note) {
        if self.master_volume <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        // Browsers suspend the context until a user gesture
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        if Self::build_note(ctx, note.frequency(), self.master_volume).is_err() {
            log::warn!("Tone playback failed for {}", note.name());
        }
    }
}
