use rand::Rng;
use rand::seq::SliceRandom;

/// Fisher–Yates (Durstenfeld) shuffle in place.
///
/// `SliceRandom::shuffle` walks from the last index down to 1, swapping each
/// slot with a uniformly chosen slot in `[0, i]`, so every permutation is
/// equally likely.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Returns a shuffled copy of `items`, leaving the input untouched.
#[must_use]
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffle_in_place(&mut shuffled, rng);
    shuffled
}
