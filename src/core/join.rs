//! Hash-based full outer join over in-memory rows.

use std::collections::HashMap;
use std::hash::Hash;

/// One row of a full outer join; the side without a match is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Joined<L, R> {
    pub left: Option<L>,
    pub right: Option<R>,
}

/// Full outer join of `left` and `right` on the keys the two closures extract.
///
/// Rows come out in left order, one per matching right row (right order),
/// followed by the right rows nothing matched. A `None` key never matches,
/// so its row is kept unpaired.
pub fn outer_join<L, R, K, FL, FR>(
    left: Vec<L>,
    right: Vec<R>,
    left_key: FL,
    right_key: FR,
) -> Vec<Joined<L, R>>
where
    L: Clone,
    R: Clone,
    K: Eq + Hash,
    FL: Fn(&L) -> Option<K>,
    FR: Fn(&R) -> Option<K>,
{
    let mut index: HashMap<K, Vec<usize>> = HashMap::new();
    for (i, row) in right.iter().enumerate() {
        if let Some(key) = right_key(row) {
            index.entry(key).or_default().push(i);
        }
    }

    let mut matched = vec![false; right.len()];
    let mut rows = Vec::with_capacity(left.len());

    for row in left {
        match left_key(&row).and_then(|key| index.get(&key)) {
            Some(hits) => {
                for &i in hits {
                    matched[i] = true;
                    rows.push(Joined {
                        left: Some(row.clone()),
                        right: Some(right[i].clone()),
                    });
                }
            }
            None => rows.push(Joined {
                left: Some(row),
                right: None,
            }),
        }
    }

    for (row, was_matched) in right.into_iter().zip(matched) {
        if !was_matched {
            rows.push(Joined {
                left: None,
                right: Some(row),
            });
        }
    }

    rows
}
