use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Draws a uniformly random `mines`-subset of all cells. Sparse boards use
/// rejection sampling; past half fill the duplicate rate climbs, so dense
/// boards draw distinct cell indices directly and stay bounded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn from_entropy() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        let (rows, cols) = config.size();
        let total = config.total_cells();
        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);

        if config.mines.saturating_mul(2) > total {
            for index in rand::seq::index::sample(&mut rng, total as usize, config.mines as usize) {
                mine_mask[[index / cols as usize, index % cols as usize]] = true;
            }
        } else {
            let mut placed: CellCount = 0;
            while placed < config.mines {
                let coords = (rng.random_range(0..rows), rng.random_range(0..cols));
                let cell = &mut mine_mask[coords.to_nd_index()];
                if !*cell {
                    *cell = true;
                    placed += 1;
                }
            }
        }

        log::debug!(
            "generated {}x{} layout with {} mines (seed {})",
            rows,
            cols,
            config.mines,
            self.seed
        );
        MineLayout::from_mine_mask(mine_mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(rows: Coord, cols: Coord, mines: CellCount, seed: u64) -> MineLayout {
        let config = GameConfig::new(rows, cols, mines).unwrap();
        RandomLayoutGenerator::new(seed).generate(config)
    }

    #[test]
    fn sparse_board_places_exact_mine_count() {
        for seed in 0..20 {
            let layout = generate(5, 5, 5, seed);
            assert_eq!(layout.mine_count(), 5);
            assert_eq!(layout.size(), (5, 5));
        }
    }

    #[test]
    fn dense_board_places_exact_mine_count() {
        for seed in 0..20 {
            let layout = generate(4, 4, 15, seed);
            assert_eq!(layout.mine_count(), 15);
            assert_eq!(layout.safe_cell_count(), 1);
        }
    }

    #[test]
    fn same_seed_reproduces_the_layout() {
        let a = generate(8, 8, 10, 42);
        let b = generate(8, 8, 10, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let layouts: Vec<_> = (0..8).map(|seed| generate(8, 8, 10, seed)).collect();
        assert!(layouts.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn single_row_board_generates_in_bounds() {
        let layout = generate(1, 10, 3, 7);
        assert_eq!(layout.mine_count(), 3);
        assert_eq!(layout.size(), (1, 10));
    }
}
