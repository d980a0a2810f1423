use rand::rngs::StdRng;
use rand::Rng;

use crate::game::{Board, Player};

use super::strategy::{best_moves_by, Strategy};

/// Maximize own disc count one move ahead; ties break uniformly at random.
pub struct GreedyStrategy {
    rng: StdRng,
}

impl GreedyStrategy {
    pub fn new(rng: StdRng) -> Self {
        GreedyStrategy { rng }
    }

    /// The greedy selection itself, callable with a borrowed RNG so that
    /// other strategies can fall back to it on their own random stream.
    pub(crate) fn select_with(
        rng: &mut StdRng,
        board: &Board,
        player: Player,
    ) -> (usize, usize) {
        let (_, best) = best_moves_by(board, player, |after| after.score(player));
        best[rng.random_range(0..best.len())]
    }
}

impl Strategy for GreedyStrategy {
    fn select_move(&mut self, board: &Board, player: Player) -> (usize, usize) {
        Self::select_with(&mut self.rng, board, player)
    }

    fn name(&self) -> &'static str {
        "Greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_greedy_always_returns_a_score_maximizer() {
        // walk a few moves into a game and check the property at each turn
        let mut board = Board::new();
        let mut strategy = GreedyStrategy::new(StdRng::seed_from_u64(3));
        let mut player = Player::One;

        for _ in 0..10 {
            if board.legal_moves(player).is_empty() {
                break;
            }
            let max_score = board
                .legal_moves(player)
                .iter()
                .map(|&(row, col)| {
                    let mut candidate = board;
                    candidate.apply_move(row, col, player);
                    candidate.score(player)
                })
                .max()
                .unwrap();

            let (row, col) = strategy.select_move(&board, player);
            let mut chosen = board;
            chosen.apply_move(row, col, player);
            assert_eq!(chosen.score(player), max_score);

            board.apply_move(row, col, player);
            player = player.other();
        }
    }

    #[test]
    fn test_greedy_tie_break_stays_within_the_maximal_set() {
        // all four opening moves tie at score 4
        let board = Board::new();
        let mut strategy = GreedyStrategy::new(StdRng::seed_from_u64(11));
        for _ in 0..50 {
            let mv = strategy.select_move(&board, Player::One);
            assert!([(2, 4), (3, 5), (4, 2), (5, 3)].contains(&mv));
        }
    }

    #[test]
    fn test_greedy_name() {
        let strategy = GreedyStrategy::new(StdRng::seed_from_u64(0));
        assert_eq!(strategy.name(), "Greedy");
    }
}
