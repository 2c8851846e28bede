use dual_deque::{ArrayDeque, Deque, LinkedDeque};

// addFirst(3) x4, addLast 7 8 9 6 0 5, addFirst(3) x5, addFirst(4)
fn build<D: Deque<u8>>(d: &mut D) {
    for _ in 0..4 {
        d.add_first(3);
    }
    for &v in &[7, 8, 9, 6, 0, 5] {
        d.add_last(v);
    }
    for _ in 0..5 {
        d.add_first(3);
    }
    d.add_first(4);
}

fn contents<D: Deque<u8>>(d: &D) -> Vec<u8> {
    (0..d.len()).filter_map(|i| d.get(i).copied()).collect()
}

#[test]
fn array_deque_trace() {
    let mut d = ArrayDeque::new();
    build(&mut d);

    assert_eq!(
        vec![4, 3, 3, 3, 3, 3, 3, 3, 3, 3, 7, 8, 9, 6, 0, 5],
        contents(&d)
    );
    assert_eq!(16, d.len());
    assert_eq!(32, d.capacity());
    assert_eq!("4 3 3 3 3 3 3 3 3 3 7 8 9 6 0 5", d.to_string());

    let removed: Vec<u8> = (0..9).filter_map(|_| d.remove_first()).collect();
    assert_eq!(vec![4, 3, 3, 3, 3, 3, 3, 3, 3], removed);

    assert_eq!(vec![3, 7, 8, 9, 6, 0, 5], contents(&d));
    assert_eq!(7, d.len());
    assert_eq!(16, d.capacity());
    assert_eq!(Some(&9), d.get(3));
}

#[test]
fn linked_deque_trace() {
    let mut d = LinkedDeque::new();
    build(&mut d);

    assert_eq!(
        vec![4, 3, 3, 3, 3, 3, 3, 3, 3, 3, 7, 8, 9, 6, 0, 5],
        contents(&d)
    );
    assert_eq!(16, d.len());

    for _ in 0..9 {
        d.remove_first();
    }

    assert_eq!(vec![3, 7, 8, 9, 6, 0, 5], contents(&d));
    assert_eq!("3 7 8 9 6 0 5", d.to_string());
    assert_eq!(7, d.len());
    assert_eq!(9, d.len_freelist());
    assert_eq!(Some(&9), d.get(3));

    assert_eq!(Some(&7), d.get(1));
    assert_eq!(Some(&3), d.front());
    assert_eq!(Some(5), d.remove_last());
    assert_eq!("3 7 8 9 6 0", d.to_string());
    assert_eq!(Some(&3), d.get_recursive(0));
}

#[test]
fn both_variants_agree_on_the_trace() {
    let mut a = ArrayDeque::new();
    let mut l = LinkedDeque::new();
    build(&mut a);
    build(&mut l);

    for _ in 0..9 {
        assert_eq!(a.remove_first(), l.remove_first());
    }

    assert_eq!(a.get(3), l.get(3));
    assert_eq!(contents(&a), contents(&l));
}
