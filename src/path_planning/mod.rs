// Path Planning algorithms module

pub mod motion;
pub mod node;
pub mod tables;
pub mod frontier;
pub mod heuristic;
pub mod reconstruct;
pub mod search;
pub mod dijkstra;
pub mod a_star;

pub use motion::{motion_between, Motion, MOTIONS, MIN_MOTION_COST};
pub use heuristic::Heuristic;
pub use search::{search, validate_problem, SearchStrategy};
pub use dijkstra::*;
pub use a_star::*;
