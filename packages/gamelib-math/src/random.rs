//! Small random-number helpers.
//!
//! Each helper takes the generator explicitly so seeded runs stay
//! reproducible; the `thread_*` variants use the thread-local generator.

use rand::Rng;

/// Uniform float in `[0, 1)`.
pub fn random<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

/// Uniform float in `[low, high)`.
pub fn float_range<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    random(rng) * (high - low) + low
}

/// Uniform integer in `[low, high]`, both ends inclusive.
///
/// Swapped bounds are accepted and reordered.
pub fn int_range<R: Rng + ?Sized>(rng: &mut R, low: i64, high: i64) -> i64 {
    let (low, high) = if low <= high { (low, high) } else { (high, low) };
    rng.random_range(low..=high)
}

pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    random(rng) < 0.5
}

pub fn thread_random() -> f64 {
    random(&mut rand::rng())
}

pub fn thread_float_range(low: f64, high: f64) -> f64 {
    float_range(&mut rand::rng(), low, high)
}

pub fn thread_int_range(low: i64, high: i64) -> i64 {
    int_range(&mut rand::rng(), low, high)
}

pub fn thread_coin_flip() -> bool {
    coin_flip(&mut rand::rng())
}
