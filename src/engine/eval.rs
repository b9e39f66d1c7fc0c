use crate::engine::config::EngineConfig;
use crate::engine::eval_constants::get_pst_value;
use crate::engine::Evaluator;
use crate::logic::board::{Board, Color, Rank};
use crate::logic::generator::MoveGenerator;
use crate::logic::rules::threatened_squares;
use std::sync::Arc;

/// Material + piece-square evaluation, with optional mobility and threat
/// terms that stay switched off at the default weights. Scores are always
/// from White's point of view; the search flips the sign for Black.
pub struct SimpleEvaluator {
    config: Arc<EngineConfig>,
    generator: MoveGenerator,
}

impl SimpleEvaluator {
    #[must_use]
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self {
            config,
            generator: MoveGenerator::new(),
        }
    }

    #[must_use]
    pub fn with_generator(config: Arc<EngineConfig>, generator: MoveGenerator) -> Self {
        Self { config, generator }
    }

    fn material_and_position(&self, board: &Board, color: Color) -> i32 {
        board
            .pieces(color)
            .map(|(sq, piece)| {
                let material = match piece.rank {
                    Rank::Man => self.config.val_man,
                    Rank::King => self.config.val_king,
                };
                material + get_pst_value(piece.rank, color, sq.row, sq.col)
            })
            .sum()
    }

    fn mobility(&self, board: &Board, color: Color) -> i32 {
        board
            .pieces(color)
            .map(|(sq, _)| {
                self.generator.moves_for(board, sq.row, sq.col).simple.len() as i32
            })
            .sum()
    }

    fn threat_pressure(&self, board: &Board, color: Color) -> i32 {
        // Pieces of the opposite side currently under capture by `color`.
        threatened_squares(&self.generator, board, color.opposite()).len() as i32
    }
}

impl Evaluator for SimpleEvaluator {
    fn evaluate(&self, board: &Board) -> i32 {
        let mut score = self.material_and_position(board, Color::White)
            - self.material_and_position(board, Color::Black);

        if self.config.weight_mobility != 0 {
            score += self.config.weight_mobility
                * (self.mobility(board, Color::White) - self.mobility(board, Color::Black));
        }
        if self.config.weight_threat != 0 {
            score += self.config.weight_threat
                * (self.threat_pressure(board, Color::White)
                    - self.threat_pressure(board, Color::Black));
        }
        score
    }
}
