use rand::rngs::StdRng;

use crate::game::{Board, Player};

use super::greedy::GreedyStrategy;
use super::human::HumanStrategy;
use super::max_stable::MaxStableStrategy;
use super::random::RandomStrategy;

/// A move-selection policy.
///
/// Every variant except Human requires at least one legal move: the game
/// server only requests a move when one exists, so an empty move list is a
/// caller bug and asserts.
pub trait Strategy {
    /// Pick one move for `player` on `board`.
    fn select_move(&mut self, board: &Board, player: Player) -> (usize, usize);

    /// Display name of the strategy.
    fn name(&self) -> &'static str;
}

/// The closed set of selectable strategies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    clap::ValueEnum,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    Human,
    Random,
    Greedy,
    MaxStable,
}

impl StrategyKind {
    /// Build the strategy, handing it the RNG used for tie-breaking.
    pub fn build(self, rng: StdRng) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Human => Box::new(HumanStrategy::new()),
            StrategyKind::Random => Box::new(RandomStrategy::new(rng)),
            StrategyKind::Greedy => Box::new(GreedyStrategy::new(rng)),
            StrategyKind::MaxStable => Box::new(MaxStableStrategy::new(rng)),
        }
    }
}

/// Simulate every legal move on its own copy of the board and keep the
/// moves whose resulting board maximizes `metric`. Returns the maximum
/// metric value alongside the maximizing moves, in enumeration order.
pub(crate) fn best_moves_by<F>(
    board: &Board,
    player: Player,
    mut metric: F,
) -> (u32, Vec<(usize, usize)>)
where
    F: FnMut(&Board) -> u32,
{
    let moves = board.legal_moves(player);
    assert!(
        !moves.is_empty(),
        "no legal moves for player {}",
        player.number()
    );

    let mut best_value = -1i64;
    let mut best_moves = Vec::new();
    for &(row, col) in &moves {
        let mut candidate = *board;
        candidate.apply_move(row, col, player);
        let value = metric(&candidate) as i64;
        if value > best_value {
            best_value = value;
            best_moves = vec![(row, col)];
        } else if value == best_value {
            best_moves.push((row, col));
        }
    }
    (best_value as u32, best_moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_best_moves_by_collects_all_maximizers() {
        // every opening move flips exactly one disc, so all four tie
        let board = Board::new();
        let (value, moves) = best_moves_by(&board, Player::One, |after| after.score(Player::One));
        assert_eq!(value, 4);
        assert_eq!(moves, vec![(2, 4), (3, 5), (4, 2), (5, 3)]);
    }

    #[test]
    fn test_best_moves_by_leaves_board_untouched() {
        let board = Board::new();
        let before = board;
        best_moves_by(&board, Player::Two, |after| after.score(Player::Two));
        assert_eq!(board, before);
    }

    #[test]
    #[should_panic(expected = "no legal moves")]
    fn test_best_moves_by_panics_without_moves() {
        let grid: Vec<Vec<u8>> = vec![vec![0; 8]; 8];
        let board = Board::from_snapshot(&grid).unwrap();
        best_moves_by(&board, Player::One, |after| after.score(Player::One));
    }

    #[test]
    fn test_build_constructs_every_kind() {
        for kind in [
            StrategyKind::Random,
            StrategyKind::Greedy,
            StrategyKind::MaxStable,
        ] {
            let mut strategy = kind.build(StdRng::seed_from_u64(0));
            let board = Board::new();
            let mv = strategy.select_move(&board, Player::One);
            assert!(board.legal_moves(Player::One).contains(&mv));
        }
        assert_eq!(StrategyKind::Human.build(StdRng::seed_from_u64(0)).name(), "Human");
    }
}
