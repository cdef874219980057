use rand::{RngCore, SeedableRng, rand_core::impls};

/// Multiplier of the linear congruential step.
const MULTIPLIER: u32 = 1_664_525;
/// Increment of the linear congruential step.
const INCREMENT: u32 = 1_013_904_223;

/// Deterministic sequence generator driving piece selection.
///
/// A 32-bit linear congruential generator advanced as
/// `seed' = (1664525 * seed + 1013904223) mod 2^32`. Identical seeds always
/// produce identical sequences, which is what makes sessions reproducible.
///
/// The generator also implements [`RngCore`] and [`SeedableRng`], so it can be
/// handed to anything in the `rand` ecosystem.
///
/// # Example
///
/// ```
/// use blockfall_engine::SequenceRng;
///
/// let mut rng = SequenceRng::new(12345);
/// assert_eq!(rng.next(), 87_628_868);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRng {
    state: u32,
}

impl Default for SequenceRng {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl SequenceRng {
    /// Seed used when the host does not provide one.
    pub const DEFAULT_SEED: u32 = 12345;

    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Returns the current internal state (the last generated value).
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Advances the generator and returns the new state.
    #[allow(clippy::should_implement_trait)]
    pub const fn next(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        self.state
    }

    /// Picks an index in `0..len` as `next() % len`.
    ///
    /// The modulo bias for lengths that are not powers of two is accepted.
    pub fn next_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot pick from an empty range");
        let len = u32::try_from(len).unwrap_or(u32::MAX);
        (self.next() % len) as usize
    }
}

impl RngCore for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        self.next()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst);
    }
}

impl SeedableRng for SequenceRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
