/// Compares two slices as multisets: same items, any order.
pub fn set_eq<A, B>(left: &[A], right: &[B]) -> bool
where
    A: PartialEq<B>,
{
    if left.len() != right.len() {
        return false;
    }

    let mut used = vec![false; right.len()];

    left.iter().all(|item| {
        let found = right
            .iter()
            .enumerate()
            .position(|(i, candidate)| !used[i] && item == candidate);

        match found {
            Some(i) => {
                used[i] = true;
                true
            }
            None => false,
        }
    })
}

/// Asserts two lists hold the same items, ignoring order.
#[macro_export]
macro_rules! assert_set_eq {
    ($left:expr, $right:expr $(,)?) => {{
        let left = &$left;
        let right = &$right;
        if !$crate::set::set_eq(&left[..], &right[..]) {
            panic!(
                "assertion failed: sets differ\n  left: {:?}\n right: {:?}",
                left, right
            );
        }
    }};
}
