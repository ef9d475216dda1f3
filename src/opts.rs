pub struct SkipListOptions {
    // levels above level 0 a tower may reach. None keeps growth unbounded,
    // so height is only bounded in expectation (O(log n)).
    pub max_height: Option<usize>,

    // seed for the default coin flipper. None seeds from the OS.
    pub seed: Option<u64>,

    // run the full structural check after every put/remove. O(n) per call.
    pub verify_invariants: bool,
}

impl Default for SkipListOptions {
    fn default() -> Self {
        return SkipListOptions {
            max_height: None,

            seed: None,

            verify_invariants: false,
        };
    }
}

impl SkipListOptions {
    pub fn capped(max_height: usize) -> Self {
        SkipListOptions {
            max_height: Some(max_height),
            ..Default::default()
        }
    }

    pub fn seeded(seed: u64) -> Self {
        SkipListOptions {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub(crate) fn allows_level(&self, level: usize) -> bool {
        match self.max_height {
            None => true,
            Some(max) => level < max,
        }
    }
}
