//! Genetic operators on customer-id permutations.
//!
//! Both operators are pure: they borrow the parent sequences immutably
//! and return fresh sequences, so callers never see their inputs change.
//!
//! - [`segment_crossover`] — segment-plus-remainder crossover with
//!   left-to-right deduplication
//! - [`invert_mutation`] — inversion of a random contiguous subsequence

use std::collections::HashSet;

use rand::Rng;

/// Crosses two parent permutations, producing two children.
///
/// Two cut points `i < j` are sampled within the shorter parent's
/// length. Child A is parent A's segment `[i, j]` followed by the whole
/// of parent B, deduplicated left to right; child B is the same segment
/// followed by the whole of parent A, deduplicated the same way.
///
/// Both children are permutations of the parents' shared value set.
/// Note the asymmetry: child B draws its remainder from parent A, so
/// parent B's ordering may not propagate into it at all.
///
/// Parents shorter than two genes are returned unchanged.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use vrptw_ga::ga::operators::segment_crossover;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let (a, b) = segment_crossover(&[1, 2, 3, 4], &[4, 3, 2, 1], &mut rng);
/// let mut sorted = a.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![1, 2, 3, 4]);
/// assert_eq!(b.len(), 4);
/// ```
pub fn segment_crossover<R: Rng>(
    parent_a: &[usize],
    parent_b: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let size = parent_a.len().min(parent_b.len());
    if size < 2 {
        return (parent_a.to_vec(), parent_b.to_vec());
    }

    let (i, j) = distinct_pair(rng, size);
    let segment = &parent_a[i..=j];

    let child_a = dedup_concat(segment, parent_b);
    let child_b = dedup_concat(segment, parent_a);
    (child_a, child_b)
}

/// Mutates a permutation by reversing a random contiguous subsequence.
///
/// Two distinct positions `p < q` are sampled and the genes between them
/// (inclusive) are reversed; everything else is untouched. Sequences
/// shorter than two genes are returned unchanged.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use vrptw_ga::ga::operators::invert_mutation;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let mutated = invert_mutation(&[1, 2, 3, 4, 5], &mut rng);
/// let mut sorted = mutated.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
/// ```
pub fn invert_mutation<R: Rng>(genes: &[usize], rng: &mut R) -> Vec<usize> {
    if genes.len() < 2 {
        return genes.to_vec();
    }
    let (p, q) = distinct_pair(rng, genes.len());
    invert_segment(genes, p, q)
}

/// Returns a copy of `genes` with positions `p..=q` reversed.
///
/// Applying the same `(p, q)` twice restores the original sequence.
///
/// # Panics
///
/// Panics if `q` is out of bounds or `p > q`.
pub fn invert_segment(genes: &[usize], p: usize, q: usize) -> Vec<usize> {
    let mut out = genes.to_vec();
    out[p..=q].reverse();
    out
}

/// Concatenates `segment` and `tail`, keeping the first occurrence of
/// each value.
fn dedup_concat(segment: &[usize], tail: &[usize]) -> Vec<usize> {
    let mut seen = HashSet::with_capacity(segment.len() + tail.len());
    let mut out = Vec::with_capacity(tail.len());
    for &gene in segment.iter().chain(tail) {
        if seen.insert(gene) {
            out.push(gene);
        }
    }
    out
}

/// Samples two distinct indices in `[0, size)`, returned in ascending
/// order. Requires `size >= 2`.
fn distinct_pair<R: Rng>(rng: &mut R, size: usize) -> (usize, usize) {
    let first = rng.random_range(0..size);
    let mut second = rng.random_range(0..size - 1);
    if second >= first {
        second += 1;
    }
    if first < second {
        (first, second)
    } else {
        (second, first)
    }
}
