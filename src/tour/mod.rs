//! Tour representation and the incremental move evaluator.
//!
//! - [`Tour`]: a cyclic permutation of city identifiers with validity
//!   and total-cost queries.
//! - [`moves`]: `O(1)` cost deltas and in-place application for swap
//!   and 2-opt flip moves, plus the flip neighbourhood enumeration the
//!   local searches share.

pub mod moves;
mod types;

pub use moves::{
    apply_flip, apply_swap, delta_flip_cost, delta_swap_cost, flip_neighborhood, Move, MoveKind,
};
pub use types::Tour;
