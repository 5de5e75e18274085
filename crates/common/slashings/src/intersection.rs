use slashwatch_consensus_beacon::ValidatorIndex;

fn sorted_distinct(indices: &[ValidatorIndex]) -> Vec<ValidatorIndex> {
    let mut indices = indices.to_vec();
    indices.sort_unstable();
    indices.dedup();
    indices
}

/// Returns the validator indices present in both collections, ascending and without duplicates.
///
/// Inputs may be in any order and may repeat values. Each input is de-duplicated before the
/// merge, so a validator listed twice in one attestation is still reported once.
pub fn intersection(first: &[ValidatorIndex], second: &[ValidatorIndex]) -> Vec<ValidatorIndex> {
    let first = sorted_distinct(first);
    let second = sorted_distinct(second);

    let mut common = Vec::with_capacity(first.len().min(second.len()));
    let (mut first_position, mut second_position) = (0, 0);
    while first_position < first.len() && second_position < second.len() {
        let (left, right) = (first[first_position], second[second_position]);
        if left < right {
            first_position += 1;
        } else if right < left {
            second_position += 1;
        } else {
            common.push(left);
            first_position += 1;
            second_position += 1;
        }
    }

    common
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(&[5, 10, 15, 20], &[10, 15, 25], &[10, 15])]
    #[case(&[7, 7, 9], &[7, 9, 9], &[7, 9])]
    #[case(&[20, 5, 15, 10], &[25, 15, 10], &[10, 15])]
    #[case(&[1, 2, 3], &[4, 5, 6], &[])]
    #[case(&[], &[1, 2], &[])]
    #[case(&[], &[], &[])]
    #[case(&[3, 3, 3], &[3], &[3])]
    #[case(&[u64::MAX, 0], &[0, u64::MAX], &[0, u64::MAX])]
    fn test_intersection(
        #[case] first: &[u64],
        #[case] second: &[u64],
        #[case] expected: &[u64],
    ) {
        assert_eq!(intersection(first, second), expected);
        assert_eq!(intersection(second, first), expected);
    }

    #[test]
    fn test_intersection_properties_on_random_inputs() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let first: Vec<u64> = (0..rng.random_range(0..40))
                .map(|_| rng.random_range(0..64))
                .collect();
            let second: Vec<u64> = (0..rng.random_range(0..40))
                .map(|_| rng.random_range(0..64))
                .collect();

            let common = intersection(&first, &second);

            assert_eq!(common, intersection(&second, &first));
            assert!(common.windows(2).all(|pair| pair[0] < pair[1]));
            assert!(
                common
                    .iter()
                    .all(|index| first.contains(index) && second.contains(index))
            );
            let expected_len = sorted_distinct(&first)
                .into_iter()
                .filter(|index| second.contains(index))
                .count();
            assert_eq!(common.len(), expected_len);
        }
    }
}
