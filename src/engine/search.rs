use crate::engine::config::EngineConfig;
use crate::engine::eval::SimpleEvaluator;
use crate::engine::{signed_for, Evaluator, Move, SearchStats, Searcher};
use crate::logic::board::{Board, Color};
use crate::logic::game::GameState;
use crate::logic::generator::{MoveGenerator, Ruleset};
use crate::logic::rules::{apply_move, legal_moves_with};
use std::sync::Arc;

/// Fixed-depth minimax with alpha-beta pruning over the legal move list.
///
/// With `use_pruning` disabled in the config the same code path visits the
/// full minimax tree; because moves are examined in generation order and the
/// best move only changes on a strict improvement, both modes select the
/// same move (pruning can only reduce the node count, never the choice).
pub struct AlphaBetaEngine {
    config: Arc<EngineConfig>,
    evaluator: SimpleEvaluator,
    generator: MoveGenerator,
    nodes_searched: u32,
}

impl AlphaBetaEngine {
    #[must_use]
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self::with_rules(config, Ruleset::default())
    }

    #[must_use]
    pub fn with_rules(config: Arc<EngineConfig>, rules: Ruleset) -> Self {
        let generator = MoveGenerator::with_rules(rules);
        Self {
            evaluator: SimpleEvaluator::with_generator(
                Arc::clone(&config),
                MoveGenerator::with_rules(rules),
            ),
            config,
            generator,
            nodes_searched: 0,
        }
    }

    /// Nodes visited by the most recent search.
    #[must_use]
    pub const fn nodes_searched(&self) -> u32 {
        self.nodes_searched
    }

    /// Best move for `color`, or `None` when `color` has no legal move
    /// (which is exactly the lost-position condition). A depth of 0 is
    /// treated as 1: the root always expands at least one ply so it has
    /// moves to choose between.
    pub fn choose_move(&mut self, board: &Board, color: Color, depth: u8) -> Option<Move> {
        self.nodes_searched = 0;
        let depth = depth.max(1);
        let moves = legal_moves_with(&self.generator, board, color);

        let mut alpha = i32::MIN;
        let beta = i32::MAX;
        let mut best: Option<(Move, i32)> = None;

        for mv in moves {
            let child = apply_move(board, &mv);
            let score = self.minimax(&child, depth - 1, alpha, beta, color.opposite(), color);
            if best.as_ref().is_none_or(|(_, s)| score > *s) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        let (mv, score) = best?;
        log::debug!(
            "search depth {} chose {:?}->{:?} score {} ({} nodes)",
            depth,
            mv.from(),
            mv.to(),
            score,
            self.nodes_searched
        );
        Some(mv)
    }

    /// Score of `board` from `max_side`'s point of view, with `to_move`
    /// about to play. A side with no legal moves has lost; the remaining
    /// depth biases mate scores so nearer wins (and more distant losses)
    /// score better.
    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        to_move: Color,
        max_side: Color,
    ) -> i32 {
        self.nodes_searched += 1;

        let moves = legal_moves_with(&self.generator, board, to_move);
        if moves.is_empty() {
            let mate = self.config.mate_score + i32::from(depth);
            return if to_move == max_side { -mate } else { mate };
        }
        if depth == 0 {
            return signed_for(max_side, self.evaluator.evaluate(board));
        }

        if to_move == max_side {
            let mut best = i32::MIN;
            for mv in &moves {
                let child = apply_move(board, mv);
                let score =
                    self.minimax(&child, depth - 1, alpha, beta, to_move.opposite(), max_side);
                best = best.max(score);
                alpha = alpha.max(best);
                if self.config.use_pruning && beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for mv in &moves {
                let child = apply_move(board, mv);
                let score =
                    self.minimax(&child, depth - 1, alpha, beta, to_move.opposite(), max_side);
                best = best.min(score);
                beta = beta.min(best);
                if self.config.use_pruning && beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

impl Searcher for AlphaBetaEngine {
    fn search(&mut self, state: &GameState, depth: u8) -> Option<(Move, SearchStats)> {
        let mv = self.choose_move(&state.board, state.turn, depth)?;
        Some((
            mv,
            SearchStats {
                depth,
                nodes: self.nodes_searched,
            },
        ))
    }
}
