//! Route search over weighted grids.
//!
//! Five strategies find a route between a grid's start and target cells:
//!
//! - **Depth-first** ([`dfs`]) — first route found, no length guarantee
//! - **Breadth-first** ([`bfs`]) — fewest steps
//! - **Uniform-cost** ([`ucs`]) — cheapest route
//! - **Greedy best-first** ([`greedy_best_first`]) — follows Manhattan
//!   distance only, no optimality guarantee
//! - **A\*** ([`astar`]) — cheapest route, guided by an admissible estimate
//!
//! Each takes an immutable [`Grid`](gridsearch_core::Grid) and returns a
//! [`SearchResult`]. Runs keep all working state local, so any number of
//! them may share one grid. The generic `*_path` forms work on anything
//! implementing the pather traits.
//!
//! Neighbors are always tried right, down, left, up; equal-priority
//! frontier entries pop in insertion order.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | DFS, BFS, greedy best-first |
//! | [`WeightedPather`] : [`Pather`] | UCS |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod distance;
mod frontier;
mod greedy;
mod reconstruct;
mod result;
mod traits;
mod ucs;

#[cfg(test)]
mod testkit;

pub use algorithm::Algorithm;
pub use astar::{astar, astar_path};
pub use bfs::{bfs, bfs_path};
pub use dfs::{dfs, dfs_path};
pub use distance::manhattan;
pub use greedy::{greedy_best_first, greedy_best_first_path};
pub use reconstruct::Predecessors;
pub use result::SearchResult;
pub use traits::{AstarPather, Pather, WeightedPather};
pub use ucs::{ucs, ucs_path};
