use dual_deque::{ArrayDeque, Deque, LinkedDeque, ResizePolicy};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::VecDeque;

fn contents<D: Deque<usize>>(d: &D) -> Vec<usize> {
    (0..d.len()).filter_map(|i| d.get(i).copied()).collect()
}

proptest! {
    #[test]
    fn random_interleaved_ops_match_vecdeque(
        action in proptest::collection::vec(any::<usize>(), 0..256)
    ){
        let mut model: VecDeque<usize> = VecDeque::new();
        let mut a: ArrayDeque<usize> = ArrayDeque::new();
        let mut l: LinkedDeque<usize> = LinkedDeque::new();

        for x in action {
            match x & 0x03 {
                0x00 => {
                    model.push_front(x);
                    a.add_first(x);
                    l.add_first(x);
                },
                0x01 => {
                    model.push_back(x);
                    a.add_last(x);
                    l.add_last(x);
                },
                0x02 => {
                    let m = model.pop_front();
                    prop_assert_eq!(m, a.remove_first());
                    prop_assert_eq!(m, l.remove_first());
                },
                0x03 => {
                    let m = model.pop_back();
                    prop_assert_eq!(m, a.remove_last());
                    prop_assert_eq!(m, l.remove_last());
                },
                _ => unreachable!(),
            }
            prop_assert_eq!(model.len(), a.len());
            prop_assert_eq!(model.len(), l.len());
            prop_assert_eq!(model.front(), a.front());
            prop_assert_eq!(model.back(), l.back());
        }

        for i in 0..=model.len() {
            prop_assert_eq!(model.get(i), a.get(i));
            prop_assert_eq!(model.get(i), l.get(i));
            prop_assert_eq!(l.get(i), l.get_recursive(i));
        }
    }
}

proptest! {
    #[test]
    fn len_counts_adds_minus_successful_removes(
        pushes in proptest::collection::vec(any::<bool>(), 0..128),
        pops in proptest::collection::vec(any::<bool>(), 0..128)
    ) {
        let mut a: ArrayDeque<usize> = ArrayDeque::new();
        let mut l: LinkedDeque<usize> = LinkedDeque::new();

        let len = pushes.len();

        for (p, v) in pushes.into_iter().zip(0..len) {
            if p {
                a.add_first(v);
                l.add_first(v);
            } else {
                a.add_last(v);
                l.add_last(v);
            }
        }

        let mut removed = 0;
        for p in pops {
            let (ra, rl) = if p {
                (a.remove_first(), l.remove_first())
            } else {
                (a.remove_last(), l.remove_last())
            };
            prop_assert_eq!(ra, rl);
            if ra.is_some() {
                removed += 1;
            }
        }

        prop_assert_eq!(len - removed, a.len());
        prop_assert_eq!(len - removed, l.len());
        prop_assert_eq!(a.is_empty(), l.is_empty());
    }
}

proptest! {
    #[test]
    fn draining_never_loses_or_reorders(
        n in 0usize..200,
        from_front in any::<bool>()
    ) {
        let mut model: VecDeque<usize> = (0..n).collect();
        let mut a: ArrayDeque<usize> = (0..n).collect();
        let mut l: LinkedDeque<usize> = (0..n).collect();

        while !model.is_empty() {
            let m = if from_front { model.pop_front() } else { model.pop_back() };
            let (ra, rl) = if from_front {
                (a.remove_first(), l.remove_first())
            } else {
                (a.remove_last(), l.remove_last())
            };
            prop_assert_eq!(m, ra);
            prop_assert_eq!(m, rl);

            let expected: Vec<usize> = model.iter().copied().collect();
            prop_assert_eq!(&expected, &contents(&a));
            prop_assert_eq!(&expected, &contents(&l));
        }

        prop_assert!(a.is_empty());
        prop_assert!(l.is_empty());
        prop_assert_eq!(8, a.capacity());
    }
}

proptest! {
    #[test]
    fn shuffled_ops_agree_across_policies(
        seed in any::<u64>(),
        values in proptest::collection::vec(any::<usize>(), 0..96),
        floor in 2usize..64,
        initial in 1usize..32
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ops: Vec<(u8, usize)> = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| ((i % 4) as u8, v))
            .collect();
        ops.shuffle(&mut rng);

        let policy = ResizePolicy::new(initial, floor);
        let mut a: ArrayDeque<usize> = ArrayDeque::with_policy(policy).unwrap();
        let mut l: LinkedDeque<usize> = LinkedDeque::with_capacity(initial);

        for (op, v) in ops {
            match op {
                0 => { a.add_first(v); l.add_first(v); },
                1 => { a.add_last(v); l.add_last(v); },
                2 => { prop_assert_eq!(a.remove_first(), l.remove_first()); },
                _ => { prop_assert_eq!(a.remove_last(), l.remove_last()); },
            }
            prop_assert!(a.len() < a.capacity());
        }

        prop_assert_eq!(contents(&a), contents(&l));
    }
}
