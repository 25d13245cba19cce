use rand::seq::SliceRandom;
use rand::Rng;

#[cfg(test)]
mod tests;

/// Builds the option list for one question: `count - 1` decoys sampled from
/// `pool` without replacement, plus `correct`, in shuffled order. A pool too
/// small to fill `count` slots yields a shorter list.
pub fn pick<T: Clone + PartialEq>(
    correct: &T,
    pool: &[T],
    count: usize,
    rng: &mut impl Rng,
) -> Vec<T> {
    let mut decoys: Vec<T> = Vec::new();
    for value in pool {
        if value != correct && !decoys.contains(value) {
            decoys.push(value.clone());
        }
    }

    let mut options: Vec<T> = decoys
        .choose_multiple(rng, count.saturating_sub(1))
        .cloned()
        .collect();
    options.push(correct.clone());
    options.shuffle(rng);
    options
}
