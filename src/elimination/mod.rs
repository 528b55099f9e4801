//! The Rose-Tarjan elimination algorithms: the FILL family (chordal
//! completion of an ordered graph), LEX M (minimal elimination ordering),
//! LEX P (perfect elimination ordering of a chordal graph), and the radix
//! sort LEX M relabels with.

mod fill;
mod lex_m;
mod lex_p;
mod radix_sort;

pub use fill::*;
pub use lex_m::*;
pub use lex_p::*;
pub use radix_sort::*;

// Construct the vertex index map of an elimination order: an inverse
// permutation with index_of[order[i]] = i.
pub(crate) fn invperm(order: &[usize]) -> Vec<usize> {
    const UNSET: usize = usize::MAX;

    let mut index_of = vec![UNSET; order.len()];
    for (i, &v) in order.iter().enumerate() {
        debug_assert!(
            v < order.len() && index_of[v] == UNSET,
            "order is not a permutation"
        );
        index_of[v] = i;
    }
    index_of
}

#[test]
fn test_invperm() {
    let order = vec![3, 0, 2, 1];
    let index_of = invperm(&order);
    assert_eq!(index_of, vec![1, 3, 2, 0]);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic]
fn test_invperm_bad_perm_panic1() {
    let order = vec![3, 0, 2, 0]; //repeated vertex
    invperm(&order);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic]
fn test_invperm_bad_perm_panic2() {
    let order = vec![4, 0, 2, 1]; //vertex out of range
    invperm(&order);
}
