//! Wall-clock timing harness.
//!
//! Every invocation is timed on its own; nothing is amortized across calls.
//! Whatever the timed closure returns is dropped after the clock stops, so
//! freeing a sorted output is not billed to the algorithm.

use std::hint::black_box;
use std::time::Instant;

/// Times `repeats` invocations of `f`, returning each duration in
/// milliseconds.
pub fn sample_ms<F, O>(repeats: usize, mut f: F) -> Vec<f64>
where
    F: FnMut() -> O,
{
    (0..repeats).map(|_| time_once_ms(&mut f)).collect()
}

/// Mean duration of `repeats` invocations of `f`, in milliseconds.
///
/// Returns `0.0` when `repeats` is zero.
///
/// # Example
///
/// ```
/// use algobench_benchmark::time_ms;
///
/// assert!(time_ms(5, || ()) >= 0.0);
/// assert_eq!(time_ms(0, || ()), 0.0);
/// ```
pub fn time_ms<F, O>(repeats: usize, f: F) -> f64
where
    F: FnMut() -> O,
{
    mean_ms(&sample_ms(repeats, f))
}

/// Times `f` once per input and returns the mean, in milliseconds.
///
/// Returns `0.0` when `inputs` is empty.
pub fn time_each_ms<I, F, O>(inputs: I, mut f: F) -> f64
where
    I: IntoIterator,
    F: FnMut(I::Item) -> O,
{
    let samples: Vec<f64> = inputs
        .into_iter()
        .map(|input| time_once_ms(|| f(input)))
        .collect();
    mean_ms(&samples)
}

/// Arithmetic mean of `samples`, or `0.0` if there are none.
pub fn mean_ms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

fn time_once_ms<F, O>(f: F) -> f64
where
    F: FnOnce() -> O,
{
    let start = Instant::now();
    let output = black_box(f());
    let elapsed = start.elapsed();
    drop(output);
    elapsed.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_noop_mean_is_non_negative() {
        assert!(time_ms(5, || ()) >= 0.0);
    }

    #[test]
    fn test_zero_repeats_is_zero() {
        let mut calls = 0;
        assert_eq!(time_ms(0, || calls += 1), 0.0);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_each_repeat_invokes_once() {
        let mut calls = 0;
        let samples = sample_ms(4, || calls += 1);
        assert_eq!(samples.len(), 4);
        assert_eq!(calls, 4);
    }

    #[test]
    fn test_measures_elapsed_time() {
        let mean = time_ms(2, || std::thread::sleep(Duration::from_millis(5)));
        assert!(mean >= 5.0, "mean was {mean}");
    }

    #[test]
    fn test_time_each_empty_is_zero() {
        assert_eq!(time_each_ms(Vec::<i64>::new(), |_| ()), 0.0);
    }

    #[test]
    fn test_time_each_visits_every_input() {
        let mut seen = Vec::new();
        let mean = time_each_ms([3, 1, 2], |x| seen.push(x));
        assert!(mean >= 0.0);
        assert_eq!(seen, vec![3, 1, 2]);
    }

    #[test]
    fn test_mean_ms() {
        assert_eq!(mean_ms(&[]), 0.0);
        assert!((mean_ms(&[1.0, 2.0, 6.0]) - 3.0).abs() < f64::EPSILON);
    }
}
