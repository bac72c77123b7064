//! Balanced random selection.
//!
//! A pull picks a student uniformly at random from those whose call count is
//! less than [`BALANCE_BAND`] above the lowest count on the roster, skipping
//! the previously pulled student whenever anyone else qualifies.
//!
//! Selection is rejection sampling over a random permutation of the roster
//! indices: out-of-band students and the last pick are rejected, and the
//! first accepted index wins. Every student is visited at most once, so a
//! pull always finishes in at most `n` steps.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{Result, RosterError};
use crate::store::Roster;

/// A student is eligible while `count - lowest < BALANCE_BAND`.
pub const BALANCE_BAND: u32 = 2;

/// Whether a student with `count` calls may be pulled when the least-called
/// student has `lowest`.
pub fn in_band(count: u32, lowest: u32) -> bool {
    count.saturating_sub(lowest) < BALANCE_BAND
}

/// Choose an index into `counts`.
///
/// `last` is the index of the previously pulled student. It is only returned
/// when no other student is in band. Returns `None` for an empty slice.
pub fn choose_index<R: Rng + ?Sized>(
    counts: &[u32],
    last: Option<usize>,
    rng: &mut R,
) -> Option<usize> {
    let lowest = counts.iter().copied().min()?;

    let mut order: Vec<usize> = (0..counts.len()).collect();
    order.shuffle(rng);

    let mut fallback = None;
    for index in order {
        if !in_band(counts[index], lowest) {
            continue;
        }
        if Some(index) == last {
            fallback = Some(index);
            continue;
        }
        return Some(index);
    }
    fallback
}

impl Roster {
    /// Pull a student using the thread-local RNG.
    pub fn pull(&mut self) -> Result<String> {
        self.pull_with(&mut rand::thread_rng())
    }

    /// Pull a student: pick one under the balance rule, increment their
    /// count and remember them as the last pull.
    pub fn pull_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<String> {
        let counts: Vec<u32> = self.students.values().copied().collect();
        let last = self
            .last_selected()
            .and_then(|last| self.students.keys().position(|name| name == last));

        let index = choose_index(&counts, last, rng).ok_or(RosterError::EmptyRoster)?;
        let (name, calls) = self
            .students
            .iter_mut()
            .nth(index)
            .ok_or(RosterError::EmptyRoster)?;

        *calls = calls
            .checked_add(1)
            .ok_or_else(|| RosterError::CountOverflow(name.clone()))?;
        let name = name.clone();
        debug!(calls = *calls, "pulled '{name}'");
        self.last_student.clone_from(&name);
        Ok(name)
    }
}
