//! Page slicing with clamping instead of failure.

/// One page of a collection
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page_count: usize,
    pub effective_page: usize,
}

/// Number of pages needed for `len` items; a page size of zero counts as one
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Clamp a requested 1-based page into `[1, max(1, page_count)]`
pub fn clamp_page(requested: i64, page_count: usize) -> usize {
    let upper = page_count.max(1) as i64;
    requested.clamp(1, upper) as usize
}

pub fn paginate<T>(records: &[T], page_size: usize, page: i64) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let page_count = page_count(records.len(), page_size);
    let effective_page = clamp_page(page, page_count);

    let start = ((effective_page - 1) * page_size).min(records.len());
    let end = (start + page_size).min(records.len());

    Page {
        items: &records[start..end],
        page_count,
        effective_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(3, 0), 3);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(-4, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9999, 3), 3);
        assert_eq!(clamp_page(9999, 0), 1);
    }

    #[test]
    fn test_paginate_middle_and_last_page() {
        let records: Vec<u32> = (1..=25).collect();

        let second = paginate(&records, 10, 2);
        assert_eq!(second.items, &records[10..20]);
        assert_eq!(second.effective_page, 2);
        assert_eq!(second.page_count, 3);

        let clamped = paginate(&records, 10, 5);
        assert_eq!(clamped.effective_page, 3);
        assert_eq!(clamped.items, &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_paginate_empty() {
        let records: Vec<u32> = Vec::new();
        let page = paginate(&records, 10, 4);
        assert!(page.items.is_empty());
        assert_eq!(page.page_count, 0);
        assert_eq!(page.effective_page, 1);
    }

    #[test]
    fn test_pages_cover_collection_in_order() {
        let records: Vec<u32> = (0..23).collect();
        let size = 4;
        let count = page_count(records.len(), size);

        let mut rebuilt = Vec::new();
        for page in 1..=count {
            rebuilt.extend_from_slice(paginate(&records, size, page as i64).items);
        }
        assert_eq!(rebuilt, records);
    }
}
