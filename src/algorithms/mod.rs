pub mod a_star;
pub mod best_first;
pub mod common;
pub mod dijkstra;
pub mod node;
pub mod reference;
