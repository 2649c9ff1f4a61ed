use crate::domain::ports::BinaryChooser;
use crate::utils::error::Result;
use crate::utils::validation::validate_range;
use std::borrow::Cow;
use std::cell::RefCell;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

/// Small xorshift generator. Not suitable for anything needing real entropy.
#[derive(Debug, Clone)]
pub struct XorShiftRng {
    state: u64,
}

impl XorShiftRng {
    pub fn seeded(seed: u64) -> Self {
        // splitmix 打散種子，避免小種子的前幾個樣本過於接近
        let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;

        Self {
            state: if z == 0 { 0x9E37_79B9_7F4A_7C15 } else { z },
        }
    }

    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        Self::seeded((nanos ^ (nanos >> 64)) as u64)
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandomSource for XorShiftRng {
    fn next_f64(&mut self) -> f64 {
        // 取高 53 位，落在 [0, 1)
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Returns `a` when the next sample exceeds the threshold, `b` otherwise.
#[derive(Debug)]
pub struct RandomChooser<R = XorShiftRng> {
    rng: RefCell<R>,
    threshold: f64,
}

impl RandomChooser<XorShiftRng> {
    /// Unseeded chooser; every run differs.
    pub fn from_time() -> Self {
        Self::new(XorShiftRng::from_time())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(XorShiftRng::seeded(seed))
    }
}

impl<R: RandomSource> RandomChooser<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: RefCell::new(rng),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Result<Self> {
        validate_range("chooser.threshold", threshold, 0.0, 1.0)?;
        self.threshold = threshold;
        Ok(self)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl<T, R: RandomSource> BinaryChooser<T> for RandomChooser<R> {
    fn choose(&self, a: T, b: T) -> T {
        let sample = self.rng.borrow_mut().next_f64();
        if sample > self.threshold {
            a
        } else {
            b
        }
    }
}

/// Either the built-in no-show behavior or a caller-supplied one.
#[derive(Default)]
pub enum NoShow {
    #[default]
    UseDefault,
    Custom(Box<dyn Fn() -> String>),
}

impl NoShow {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn() -> String + 'static,
    {
        Self::Custom(Box::new(f))
    }
}

impl fmt::Debug for NoShow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UseDefault => f.write_str("UseDefault"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Attaches a [`NoShow`] behavior to any chooser, closures included.
#[derive(Debug)]
pub struct WithNoShow<C> {
    chooser: C,
    no_show: NoShow,
}

impl<C> WithNoShow<C> {
    pub fn new(chooser: C, no_show: NoShow) -> Self {
        Self { chooser, no_show }
    }
}

impl<T, C: BinaryChooser<T>> BinaryChooser<T> for WithNoShow<C> {
    fn choose(&self, a: T, b: T) -> T {
        self.chooser.choose(a, b)
    }

    fn no_show_message(&self) -> Cow<'_, str> {
        match &self.no_show {
            NoShow::UseDefault => self.chooser.no_show_message(),
            NoShow::Custom(f) => Cow::Owned(f()),
        }
    }
}
