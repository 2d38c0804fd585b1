use rand::seq::SliceRandom;

use crate::application::ports::PhrasePicker;

/// Picks uniformly at random with the thread-local RNG.
pub struct RandomPhrasePicker;

impl PhrasePicker for RandomPhrasePicker {
    fn pick(&self, phrases: &[&'static str]) -> &'static str {
        phrases
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or_default()
    }
}
