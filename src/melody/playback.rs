//! Melody playback and input
//!
//! Strictly ordered: one element's slot completes before the next begins.
//! The driver advances the single pending countdown; each completion plays
//! at most one note or resolves one transition.

use crate::audio::{Note, ToneSink};

use super::state::{
    INTRO_GAP, INTRO_PAUSE, MelodyPhase, MelodyState, NEXT_LEVEL_DELAY, PLAYBACK_GAP,
    RETRY_DELAY, START_LIVES,
};

/// One-shot intents from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MelodyIntent {
    /// Start a fresh run (alphabet intro first).
    Start,
    /// A piano key was pressed.
    PressKey(Note),
    /// Replay the current sequence while listening.
    Replay,
    /// Continue after game over, keeping the level.
    Continue,
}

/// Dispatch a single intent against the session.
pub fn apply<S: ToneSink>(state: &mut MelodyState, intent: MelodyIntent, sink: &mut S) {
    match intent {
        MelodyIntent::Start => {
            if state.phase == MelodyPhase::Idle {
                state.phase = MelodyPhase::Intro;
                state.intro_pos = 0;
                sink.play(Note::ALL[0]);
                state.delay.start(INTRO_GAP);
            }
        }
        MelodyIntent::PressKey(note) => {
            if state.phase != MelodyPhase::Listening {
                return;
            }
            // Key presses always sound, right or wrong.
            sink.play(note);
            if note == state.sequence[state.cursor] {
                state.cursor += 1;
                if state.cursor == state.sequence.len() {
                    // Success, exactly once, after the final element.
                    state.level += 1;
                    state.phase = MelodyPhase::LevelClear;
                    state.delay.start(NEXT_LEVEL_DELAY);
                }
            } else {
                miss(state);
            }
        }
        MelodyIntent::Replay => {
            if state.phase == MelodyPhase::Listening {
                state.cursor = 0;
                start_playback(state, sink);
            }
        }
        MelodyIntent::Continue => {
            if state.phase == MelodyPhase::GameOver {
                state.lives = START_LIVES;
                start_level(state, sink);
            }
        }
    }
}

/// Advance the pending suspension by `dt` seconds.
pub fn advance<S: ToneSink>(state: &mut MelodyState, dt: f32, sink: &mut S) {
    if !state.delay.tick(dt) {
        return;
    }
    match state.phase {
        MelodyPhase::Intro => {
            state.intro_pos += 1;
            if state.intro_pos < Note::ALL.len() {
                sink.play(Note::ALL[state.intro_pos]);
                state.delay.start(INTRO_GAP);
            } else if state.intro_pos == Note::ALL.len() {
                // Short breath between the intro and the first sequence.
                state.delay.start(INTRO_PAUSE);
            } else {
                start_level(state, sink);
            }
        }
        MelodyPhase::PlayingBack => {
            state.playback_pos += 1;
            if state.playback_pos < state.sequence.len() {
                sink.play(state.sequence[state.playback_pos]);
                state.delay.start(PLAYBACK_GAP);
            } else {
                state.phase = MelodyPhase::Listening;
            }
        }
        MelodyPhase::LevelClear => start_level(state, sink),
        // Replay the same sequence, not a fresh one.
        MelodyPhase::Missed => start_playback(state, sink),
        _ => {}
    }
}

fn miss(state: &mut MelodyState) {
    state.lives = state.lives.saturating_sub(1);
    if state.lives == 0 {
        state.phase = MelodyPhase::GameOver;
        state.delay.cancel();
    } else {
        state.cursor = 0;
        state.phase = MelodyPhase::Missed;
        state.delay.start(RETRY_DELAY);
    }
}

fn start_level<S: ToneSink>(state: &mut MelodyState, sink: &mut S) {
    state.cursor = 0;
    state.generate_sequence();
    start_playback(state, sink);
}

fn start_playback<S: ToneSink>(state: &mut MelodyState, sink: &mut S) {
    debug_assert!(!state.sequence.is_empty(), "playback of an empty sequence");
    state.playback_pos = 0;
    state.phase = MelodyPhase::PlayingBack;
    sink.play(state.sequence[0]);
    state.delay.start(PLAYBACK_GAP);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        notes: Vec<Note>,
    }

    impl ToneSink for Recorder {
        fn play(&mut self, note: Note) {
            self.notes.push(note);
        }
    }

    /// Run `advance` in small steps for `secs` of virtual time.
    fn run_for(state: &mut MelodyState, secs: f32, sink: &mut Recorder) {
        let mut remaining = secs;
        while remaining > 0.0 {
            advance(state, 0.05, sink);
            remaining -= 0.05;
        }
    }

    fn listening_state(seed: u64) -> (MelodyState, Recorder) {
        let mut state = MelodyState::new(seed);
        let mut sink = Recorder::default();
        apply(&mut state, MelodyIntent::Start, &mut sink);
        // Intro: 13 notes at 0.4s, the 0.5s breath, then the first sequence.
        run_for(&mut state, 13.0 * INTRO_GAP + INTRO_PAUSE + 2.0, &mut sink);
        assert_eq!(state.phase, MelodyPhase::Listening);
        sink.notes.clear();
        (state, sink)
    }

    #[test]
    fn intro_plays_the_full_alphabet_in_order() {
        let mut state = MelodyState::new(1);
        let mut sink = Recorder::default();
        apply(&mut state, MelodyIntent::Start, &mut sink);
        run_for(&mut state, 13.0 * INTRO_GAP + 1.0, &mut sink);
        // The first sequence may already have started; the intro comes first.
        assert!(sink.notes.len() >= 13);
        assert_eq!(&sink.notes[..13], &Note::ALL[..]);
    }

    #[test]
    fn playback_is_strictly_ordered_then_listens() {
        let (state, _sink) = listening_state(2);
        assert_eq!(state.sequence.len(), 1);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn success_fires_only_after_the_final_element() {
        let (mut state, mut sink) = listening_state(3);
        state.sequence = vec![Note::C4, Note::E4, Note::G4];
        state.cursor = 0;

        apply(&mut state, MelodyIntent::PressKey(Note::C4), &mut sink);
        assert_eq!(state.phase, MelodyPhase::Listening);
        assert_eq!(state.level, 1);

        apply(&mut state, MelodyIntent::PressKey(Note::E4), &mut sink);
        assert_eq!(state.phase, MelodyPhase::Listening);

        apply(&mut state, MelodyIntent::PressKey(Note::G4), &mut sink);
        assert_eq!(state.phase, MelodyPhase::LevelClear);
        assert_eq!(state.level, 2);
    }

    #[test]
    fn miss_replays_the_same_sequence() {
        let (mut state, mut sink) = listening_state(4);
        state.sequence = vec![Note::C4, Note::E4];
        state.cursor = 0;

        apply(&mut state, MelodyIntent::PressKey(Note::C4), &mut sink);
        apply(&mut state, MelodyIntent::PressKey(Note::D4), &mut sink);
        assert_eq!(state.phase, MelodyPhase::Missed);
        assert_eq!(state.lives, START_LIVES - 1);
        assert_eq!(state.cursor, 0);

        sink.notes.clear();
        run_for(&mut state, RETRY_DELAY + 2.0 * PLAYBACK_GAP + 0.5, &mut sink);
        assert_eq!(state.phase, MelodyPhase::Listening);
        // Identical sequence, not regenerated.
        assert_eq!(sink.notes, vec![Note::C4, Note::E4]);
    }

    #[test]
    fn input_outside_listening_is_ignored() {
        let (mut state, mut sink) = listening_state(5);
        state.sequence = vec![Note::C4];
        state.cursor = 0;
        state.phase = MelodyPhase::PlayingBack;

        apply(&mut state, MelodyIntent::PressKey(Note::C4), &mut sink);
        assert_eq!(state.cursor, 0);
        assert!(sink.notes.is_empty());
    }

    #[test]
    fn replay_restarts_input_from_the_top() {
        let (mut state, mut sink) = listening_state(6);
        state.sequence = vec![Note::C4, Note::E4];
        state.cursor = 1;

        apply(&mut state, MelodyIntent::Replay, &mut sink);
        assert_eq!(state.phase, MelodyPhase::PlayingBack);
        assert_eq!(state.cursor, 0);
        assert_eq!(sink.notes, vec![Note::C4]);
    }

    #[test]
    fn out_of_lives_preserves_the_level_for_continue() {
        let (mut state, mut sink) = listening_state(7);
        state.level = 5;
        state.lives = 1;
        state.sequence = vec![Note::C4];
        state.cursor = 0;

        apply(&mut state, MelodyIntent::PressKey(Note::D4), &mut sink);
        assert_eq!(state.phase, MelodyPhase::GameOver);
        assert_eq!(state.level, 5);

        // Input is dead while game over.
        apply(&mut state, MelodyIntent::PressKey(Note::C4), &mut sink);
        assert_eq!(state.phase, MelodyPhase::GameOver);

        apply(&mut state, MelodyIntent::Continue, &mut sink);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.level, 5);
        assert_eq!(state.phase, MelodyPhase::PlayingBack);
        assert_eq!(state.sequence.len(), 5);
    }
}
