use rand::rngs::StdRng;
use rand::Rng;

use crate::game::{Board, Player};

use super::strategy::Strategy;

/// Uniform-random choice over the legal moves.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(rng: StdRng) -> Self {
        RandomStrategy { rng }
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, board: &Board, player: Player) -> (usize, usize) {
        let moves = board.legal_moves(player);
        assert!(
            !moves.is_empty(),
            "no legal moves for player {}",
            player.number()
        );
        moves[self.rng.random_range(0..moves.len())]
    }

    fn name(&self) -> &'static str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_random_strategy_selects_legal_move() {
        let mut strategy = RandomStrategy::new(StdRng::seed_from_u64(42));
        let board = Board::new();
        let legal = board.legal_moves(Player::One);

        for _ in 0..100 {
            let mv = strategy.select_move(&board, Player::One);
            assert!(legal.contains(&mv), "move {:?} is not legal", mv);
        }
    }

    #[test]
    fn test_random_strategy_is_reproducible_under_a_seed() {
        let board = Board::new();
        let mut first = RandomStrategy::new(StdRng::seed_from_u64(7));
        let mut second = RandomStrategy::new(StdRng::seed_from_u64(7));
        for _ in 0..20 {
            assert_eq!(
                first.select_move(&board, Player::Two),
                second.select_move(&board, Player::Two)
            );
        }
    }

    #[test]
    fn test_random_strategy_name() {
        let strategy = RandomStrategy::new(StdRng::seed_from_u64(0));
        assert_eq!(strategy.name(), "Random");
    }
}
