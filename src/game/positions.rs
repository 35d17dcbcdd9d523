use super::config::LevelConfig;
use rand::Rng;
use std::collections::BTreeSet;

/// Where the wolves and raccoons are hiding for the current level.
/// The two sets are disjoint by construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Positions {
    pub targets: BTreeSet<usize>,
    pub decoys: BTreeSet<usize>,
}

impl Positions {
    /// Draws `target_count` + `decoy_count` distinct cell indices in
    /// `[0, grid_size²)` by rejection sampling. Terminates because the
    /// config validation guarantees at least one cell stays empty.
    pub fn generate(rng: &mut impl Rng, config: &LevelConfig) -> Self {
        let total = config.total_cells();

        let mut targets = BTreeSet::new();
        while targets.len() < config.target_count {
            targets.insert(rng.gen_range(0..total));
        }

        let mut decoys = BTreeSet::new();
        while decoys.len() < config.decoy_count {
            let cell = rng.gen_range(0..total);
            if !targets.contains(&cell) {
                decoys.insert(cell);
            }
        }

        Positions { targets, decoys }
    }
}
