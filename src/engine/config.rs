use crate::engine::eval_constants;
use serde::{Deserialize, Serialize};

/// Engine tuning knobs. Loadable from JSON with every field optional, so a
/// config file only has to name the values it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Material value of a man, in centipiece units.
    pub val_man: i32,
    /// Material value of a king.
    pub val_king: i32,
    /// Weight of the mobility term (simple-move count difference).
    /// Zero disables the term entirely.
    pub weight_mobility: i32,
    /// Weight of the threat term (pieces currently capturable).
    /// Zero disables the term entirely.
    pub weight_threat: i32,
    /// Base score for a won position; actual mate scores are biased by the
    /// remaining depth so the search prefers faster wins.
    pub mate_score: i32,
    /// Default search depth in plies when the caller does not pass one.
    pub search_depth: u8,
    /// When false, the search visits the full minimax tree without beta
    /// cutoffs. Kept for regression testing against the pruned search.
    pub use_pruning: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            val_man: eval_constants::VAL_MAN,
            val_king: eval_constants::VAL_KING,
            weight_mobility: 0,
            weight_threat: 0,
            mate_score: 100_000,
            search_depth: 4,
            use_pruning: true,
        }
    }
}

impl EngineConfig {
    /// Parses a config from JSON, falling back to defaults for any missing
    /// field.
    pub fn load_from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
