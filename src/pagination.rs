pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-based `page` window of `items`. Pages outside the data
/// (including page 0) come back empty; whether that is a 404 is up to the
/// caller.
pub fn paginate<T>(items: Vec<T>, page: usize) -> Vec<T> {
    // page 0 and offsets past usize::MAX are both out of range
    let Some(start) = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    else {
        return Vec::new();
    };
    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_is_capped_at_page_size() {
        let items: Vec<i64> = (0..25).collect();
        assert_eq!(paginate(items, 1), (0..10).collect::<Vec<i64>>());
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let items: Vec<i64> = (0..25).collect();
        assert_eq!(paginate(items, 3), (20..25).collect::<Vec<i64>>());
    }

    #[test]
    fn page_past_the_data_is_empty() {
        let items: Vec<i64> = (0..25).collect();
        assert!(paginate(items, 4).is_empty());
    }

    #[test]
    fn enormous_page_number_is_empty() {
        let items: Vec<i64> = (0..5).collect();
        assert!(paginate(items, usize::MAX).is_empty());
    }

    #[test]
    fn page_zero_is_empty() {
        let items: Vec<i64> = (0..5).collect();
        assert!(paginate(items, 0).is_empty());
    }

    #[test]
    fn short_input_fits_on_one_page() {
        let items: Vec<i64> = (0..3).collect();
        assert_eq!(paginate(items, 1).len(), 3);
    }
}
