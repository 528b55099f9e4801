use num_traits::{PrimInt, Unsigned};

// 16 buckets, 4 bits consumed per pass
const RADIX_BITS: usize = 4;
const N_BUCKETS: usize = 1 << RADIX_BITS;

/// Stable LSD base-16 sort of `values`, ascending by the unsigned key that
/// `key_of` assigns to each value.
///
/// The number of passes adapts to the largest key actually present rather
/// than the full width of `K`, so sorting small keys stored in a wide type
/// costs no extra passes.

pub fn radix_sort<V, K, F>(values: &mut [V], mut key_of: F)
where
    V: Copy,
    K: PrimInt + Unsigned,
    F: FnMut(&V) -> K,
{
    let Some(max_key) = values.iter().map(&mut key_of).max() else {
        return;
    };

    let key_bits = std::mem::size_of::<K>() * 8;
    let mask = K::from(N_BUCKETS - 1).unwrap();
    let mut buckets: [Vec<V>; N_BUCKETS] = std::array::from_fn(|_| Vec::new());

    let mut shift = 0;
    while shift < key_bits && (max_key >> shift) > K::zero() {
        for v in values.iter() {
            let b = ((key_of(v) >> shift) & mask).to_usize().unwrap();
            buckets[b].push(*v);
        }

        // gather: bucket order is ascending and each bucket preserved
        // insertion order, so the pass is stable
        let mut off = 0;
        for bucket in buckets.iter_mut() {
            values[off..off + bucket.len()].copy_from_slice(bucket);
            off += bucket.len();
            bucket.clear();
        }

        shift += RADIX_BITS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn assert_sorted_by_key<V, K, F>(values: &[V], mut key_of: F)
    where
        K: PrimInt + Unsigned,
        F: FnMut(&V) -> K,
    {
        for pair in values.windows(2) {
            assert!(key_of(&pair[0]) <= key_of(&pair[1]));
        }
    }

    #[test]
    fn sorts_by_external_key_map() {
        let key = vec![170_usize, 45, 75, 90, 802, 24, 2, 66];
        let mut values: Vec<usize> = (0..key.len()).collect();

        radix_sort(&mut values, |&v| key[v]);

        assert_eq!(values, vec![6, 5, 1, 7, 2, 3, 0, 4]);
    }

    #[test]
    fn sorts_random_values_of_every_key_width() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let mut values: Vec<u8> = (0..1000).map(|_| rng.gen()).collect();
        radix_sort(&mut values, |&v| v);
        assert_sorted_by_key(&values, |&v| v);

        let mut values: Vec<u16> = (0..1000).map(|_| rng.gen()).collect();
        radix_sort(&mut values, |&v| v);
        assert_sorted_by_key(&values, |&v| v);

        let mut values: Vec<u32> = (0..1000).map(|_| rng.gen()).collect();
        radix_sort(&mut values, |&v| v);
        assert_sorted_by_key(&values, |&v| v);

        let mut values: Vec<u64> = (0..1000).map(|_| rng.gen()).collect();
        radix_sort(&mut values, |&v| v);
        assert_sorted_by_key(&values, |&v| v);
    }

    #[test]
    fn equal_keys_preserve_input_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        // (key, arrival position): few distinct keys force many ties
        let mut values: Vec<(u32, usize)> = (0..1000)
            .map(|i| (rng.gen_range(0..8u32) * 1000, i))
            .collect();

        radix_sort(&mut values, |&(key, _)| key);

        assert_sorted_by_key(&values, |&(key, _)| key);
        for pair in values.windows(2) {
            if pair[0].0 == pair[1].0 {
                assert!(pair[0].1 < pair[1].1, "tie broke input order");
            }
        }
    }

    #[test]
    fn handles_empty_and_all_zero_keys() {
        let mut values: Vec<u32> = vec![];
        radix_sort(&mut values, |&v| v);
        assert!(values.is_empty());

        // max key 0 means zero passes; the slice must survive untouched
        let mut values = vec![3u32, 1, 2];
        radix_sort(&mut values, |_| 0u64);
        assert_eq!(values, vec![3, 1, 2]);
    }
}
