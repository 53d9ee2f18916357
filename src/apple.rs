use rand::Rng;

use crate::config::GameConfig;
use crate::snake::Cell;

/// The single food item on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Apple {
    pub position: Cell,
}

impl Apple {
    /// Creates an apple at an explicit position.
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Creates an apple at a uniform-random cell on the board.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Self {
        Self {
            position: random_cell(rng, config),
        }
    }

    /// Moves the apple to a new uniform-random cell.
    ///
    /// The draw is over the whole board; cells currently occupied by the
    /// snake are not excluded, so the apple can land under the body.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R, config: &GameConfig) {
        self.position = random_cell(rng, config);
    }
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Cell {
    Cell {
        x: rng.gen_range(0..config.columns()) * config.cell_size,
        y: rng.gen_range(0..config.rows()) * config.cell_size,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GameConfig;

    use super::Apple;

    #[test]
    fn relocation_stays_cell_aligned_and_on_board() {
        let config = GameConfig::classic();
        let mut rng = StdRng::seed_from_u64(11);
        let mut apple = Apple::spawn(&mut rng, &config);

        for _ in 0..200 {
            apple.relocate(&mut rng, &config);

            assert_eq!(apple.position.x % config.cell_size, 0);
            assert_eq!(apple.position.y % config.cell_size, 0);
            assert!(apple
                .position
                .is_inside(config.width, config.height));
        }
    }

    #[test]
    fn same_seed_produces_same_spawn_sequence() {
        let config = GameConfig::classic();
        let mut first = StdRng::seed_from_u64(99);
        let mut second = StdRng::seed_from_u64(99);

        for _ in 0..20 {
            assert_eq!(
                Apple::spawn(&mut first, &config),
                Apple::spawn(&mut second, &config)
            );
        }
    }
}
