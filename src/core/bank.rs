//! Prompt bank with no-repeat draws
//!
//! Quiz questions and other prompt pools are drawn without repetition until
//! the bank is exhausted, at which point the exclusion set clears and repeats
//! become possible again. Exhaustion is never an error.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// An ordered prompt collection plus the indices used this cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptBank<T> {
    prompts: Vec<T>,
    used: Vec<usize>,
}

impl<T: Clone> PromptBank<T> {
    pub fn new(prompts: Vec<T>) -> Self {
        Self {
            prompts,
            used: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Prompts not yet drawn in the current cycle.
    pub fn remaining(&self) -> usize {
        self.prompts.len() - self.used.len()
    }

    /// Draw a prompt not seen this cycle, uniformly at random. When every
    /// prompt has been used the cycle restarts. Returns `None` only for an
    /// empty bank.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<T> {
        if self.prompts.is_empty() {
            return None;
        }
        if self.used.len() == self.prompts.len() {
            self.used.clear();
        }
        loop {
            let idx = rng.random_range(0..self.prompts.len());
            if !self.used.contains(&idx) {
                self.used.push(idx);
                return Some(self.prompts[idx].clone());
            }
        }
    }

    /// Start a fresh cycle (on session restart).
    pub fn reset_cycle(&mut self) {
        self.used.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn empty_bank_draws_nothing() {
        let mut bank: PromptBank<u8> = PromptBank::new(vec![]);
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(bank.draw(&mut rng).is_none());
    }

    #[test]
    fn one_cycle_covers_every_prompt() {
        let mut bank = PromptBank::new(vec![10, 20, 30, 40, 50]);
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen: Vec<i32> = (0..5).filter_map(|_| bank.draw(&mut rng)).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn exhaustion_resets_and_repeats_become_possible() {
        let mut bank = PromptBank::new(vec![1, 2]);
        let mut rng = Pcg32::seed_from_u64(3);
        let _ = bank.draw(&mut rng);
        let _ = bank.draw(&mut rng);
        assert_eq!(bank.remaining(), 0);
        // Third draw starts a new cycle instead of failing.
        assert!(bank.draw(&mut rng).is_some());
        assert_eq!(bank.remaining(), 1);
    }

    proptest! {
        #[test]
        fn no_repeat_within_a_cycle(seed in any::<u64>(), n in 1usize..12) {
            let mut bank = PromptBank::new((0..n as u32).collect::<Vec<_>>());
            let mut rng = Pcg32::seed_from_u64(seed);
            let drawn: Vec<u32> = (0..n).filter_map(|_| bank.draw(&mut rng)).collect();
            let mut sorted = drawn.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), n, "repeat within one cycle: {:?}", drawn);
        }
    }
}
