mod skiplist;
mod errors;
pub mod opts;
pub mod printer;
pub mod logger;

pub use crate::errors::{Error, Result};
pub use crate::opts::SkipListOptions;
pub use crate::skiplist::{
    CoinFlipper, CoinFlipperRand, CoinFlipperScripted, NodeRef, SkipIterator, SkipKey, SkipKeys, SkipList,
};
