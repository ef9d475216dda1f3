use std::collections::VecDeque;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the fair coin that decides whether a tower grows one more level.
pub trait CoinFlipper: Send {
    fn flip(&mut self) -> bool;
}

impl<F> CoinFlipper for F where F: FnMut() -> bool + Send {
    fn flip(&mut self) -> bool {
        self()
    }
}

pub struct CoinFlipperRand {
    rng: StdRng,
}

impl CoinFlipperRand {
    pub fn new() -> CoinFlipperRand {
        return CoinFlipperRand { rng: StdRng::from_entropy() };
    }

    pub fn seeded(seed: u64) -> CoinFlipperRand {
        return CoinFlipperRand { rng: StdRng::seed_from_u64(seed) };
    }
}

impl CoinFlipper for CoinFlipperRand {
    fn flip(&mut self) -> bool {
        return self.rng.gen_bool(0.5);
    }
}

/// Replays a fixed sequence of flips, then keeps answering `false`.
pub struct CoinFlipperScripted {
    flips: VecDeque<bool>,
}

impl CoinFlipperScripted {
    pub fn new<I: IntoIterator<Item=bool>>(flips: I) -> CoinFlipperScripted {
        return CoinFlipperScripted { flips: flips.into_iter().collect() };
    }

    // a tower of exactly `height` levels above level 0
    pub fn tower(height: usize) -> CoinFlipperScripted {
        let flips = std::iter::repeat(true).take(height).chain(std::iter::once(false));
        return CoinFlipperScripted::new(flips);
    }

    pub fn extend<I: IntoIterator<Item=bool>>(&mut self, flips: I) {
        self.flips.extend(flips);
    }
}

impl CoinFlipper for CoinFlipperScripted {
    fn flip(&mut self) -> bool {
        return self.flips.pop_front().unwrap_or(false);
    }
}
