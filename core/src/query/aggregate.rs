// oasis/src/query/aggregate.rs

use std::iter::Sum;

pub fn count_where<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> usize {
  items.iter().filter(|item| predicate(item)).count()
}

pub fn sum_where<T, N>(items: &[T], predicate: impl Fn(&T) -> bool, field: impl Fn(&T) -> N) -> N
where
  N: Sum<N>,
{
  items.iter().filter(|item| predicate(item)).map(field).sum()
}

/// The `page`-th slice of `per_page` items, counting pages from 0. Past the
/// end, or with `per_page` of 0, the page is empty.
pub fn page<T: Clone>(items: &[T], page: usize, per_page: usize) -> Vec<T> {
  items.iter().skip(page.saturating_mul(per_page)).take(per_page).cloned().collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn count_and_sum_respect_the_predicate() {
    let values = [1u32, 5, 8, 12];
    assert_eq!(count_where(&values, |v| *v >= 5), 3);
    assert_eq!(sum_where(&values, |v| *v >= 5, |v| *v), 25);
    assert_eq!(sum_where(&values, |_| false, |v| *v), 0);
  }

  #[test]
  fn pages_split_in_order() {
    let values = [1, 2, 3, 4, 5];
    assert_eq!(page(&values, 0, 2), vec![1, 2]);
    assert_eq!(page(&values, 2, 2), vec![5]);
    assert!(page(&values, 3, 2).is_empty());
    assert!(page(&values, 0, 0).is_empty());
  }
}
