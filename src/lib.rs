//! Vertex elimination algorithms on simple, connected, undirected graphs,
//! after Rose & Tarjan, "Algorithmic aspects of vertex elimination on
//! graphs" (1976).
//!
//! The [`elimination`](crate::elimination) module holds the algorithms:
//! the FILL family computing the chordal completion of an ordered graph,
//! LEX M computing a minimal elimination ordering, and LEX P computing a
//! perfect elimination ordering of a chordal graph. The
//! [`random`](crate::random) module generates the connected and chordal
//! graphs used to exercise them.

pub mod elimination;
pub mod graph;
pub mod random;
