#![allow(dead_code)]

use rand::distributions::{Alphanumeric, DistString};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skipmap::{SkipList, SkipListOptions};

pub fn rand_key(rng: &mut StdRng) -> String {
    Alphanumeric.sample_string(rng, 16)
}

pub fn gen_key(key: u64) -> String {
    format!("k={:010}", key)
}

pub fn populate(key_nums: u64, seq: bool, seed: u64) -> SkipList<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut list = SkipList::with_options(SkipListOptions::seeded(seed));

    for i in 0..key_nums {
        let key = if seq { gen_key(i) } else { gen_key(rng.gen_range(0..key_nums)) };
        list.put(key, i).unwrap();
    }
    list
}

pub fn rand_read(list: &SkipList<u64>, key_nums: u64, reads: u64, rng: &mut StdRng) -> u64 {
    let mut found = 0;
    for _ in 0..reads {
        let key = gen_key(rng.gen_range(0..key_nums));
        if list.get(&key).unwrap().is_some() {
            found += 1;
        }
    }
    found
}
