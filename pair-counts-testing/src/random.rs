use std::{cell::RefCell, rc::Rc};

use rand::{seq::SliceRandom, RngCore, SeedableRng};

pub trait RandomProvider {
    /// Returns a random u64.
    fn random_u64(&self) -> u64;

    /// Returns a number in `0..bound`. `bound` must not be zero.
    fn random_below(&self, bound: u64) -> u64 {
        self.random_u64() % bound
    }

    /// Returns true roughly once every `odds` calls. Zero odds never hit.
    fn one_in(&self, odds: u64) -> bool {
        odds != 0 && self.random_below(odds) == 0
    }
}

#[derive(Clone)]
pub struct DeterministicRandomProvider {
    rand: Rc<RefCell<rand_chacha::ChaCha8Rng>>,
}

impl DeterministicRandomProvider {
    pub fn new(seed: u64) -> Self {
        DeterministicRandomProvider {
            rand: Rc::new(RefCell::new(rand_chacha::ChaCha8Rng::seed_from_u64(seed))),
        }
    }

    pub fn shuffle<T>(&self, values: &mut [T]) {
        values.shuffle(&mut *self.rand.borrow_mut());
    }

    /// A sequence of `len` values drawn from `alphabet_size` evenly spaced integers centred on zero.
    /// A small alphabet makes ties likely. Roughly one in `nan_odds` values is NaN.
    pub fn random_sequence(&self, len: usize, alphabet_size: u64, nan_odds: u64) -> Vec<f64> {
        let offset = (alphabet_size / 2) as f64;
        (0..len)
            .map(|_| {
                if self.one_in(nan_odds) {
                    f64::NAN
                } else {
                    self.random_below(alphabet_size) as f64 - offset
                }
            })
            .collect()
    }
}

impl RandomProvider for DeterministicRandomProvider {
    fn random_u64(&self) -> u64 {
        self.rand.borrow_mut().next_u64()
    }
}
