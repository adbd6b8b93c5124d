//! Deterministic random number generation for target selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical targets
//! - **Reproducible**: the seed is kept, so any game can be replayed
//! - **Uniform**: every integer in `[1, max]` is equally likely
//!
//! ## Usage
//!
//! ```
//! use guessnum::core::{GameRng, Value};
//!
//! let mut rng = GameRng::new(42);
//! let target = rng.random_integer(&Value::Int(30)).unwrap();
//! assert!((1..=30).contains(&target));
//!
//! // Same seed, same target
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng2.random_integer(&Value::Int(30)).unwrap(), target);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::error::NotANumber;
use super::value::{is_number, to_integer, Value};

/// Deterministic RNG used to draw the target number.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The drawn seed is kept, so a game can still be reproduced from
    /// [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a uniform real in `[1, max + 1)`.
    ///
    /// Fails unless `max` is a finite number greater than zero.
    pub fn random_real(&mut self, max: &Value) -> Result<f64, NotANumber> {
        let m = match max.as_f64() {
            Some(m) if is_number(max) && m > 0.0 => m,
            _ => return Err(NotANumber { value: max.clone() }),
        };

        let high = m + 1.0;
        // A bound below f64 resolution collapses the range onto 1.0.
        if high > 1.0 {
            Ok(self.inner.gen_range(1.0..high))
        } else {
            Ok(1.0)
        }
    }

    /// Draw a uniform integer in `[1, max]`.
    ///
    /// A fractional `max` is floored first so the result never exceeds it;
    /// a `max` that floors below 1 fails. A finite `max` beyond the `i64`
    /// range saturates at `i64::MAX`. The draw is the floor of a uniform
    /// real in `[1, max + 1)`, clamped against rounding at very large bounds.
    pub fn random_integer(&mut self, max: &Value) -> Result<i64, NotANumber> {
        let bound = match to_integer(max) {
            Ok(m) if m >= 1 => m,
            Ok(_) => return Err(NotANumber { value: max.clone() }),
            Err(_) if is_number(max) && max.as_f64().is_some_and(|m| m > 0.0) => i64::MAX,
            Err(err) => return Err(err),
        };

        let real = self.random_real(&Value::Int(bound))?;
        let drawn = to_integer(&Value::Float(real)).unwrap_or(bound);

        Ok(drawn.clamp(1, bound))
    }
}
