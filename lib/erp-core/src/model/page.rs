/// One server-fetched page of a collection
///
/// Items keep the order in which the server returned them.
#[derive(Clone, Debug, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page_index: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub is_first: bool,
    pub is_last: bool,
}

impl<T> PageResult<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks what every page reported by the server must satisfy.
    ///
    /// A page past the end (e.g. after deleting the only row of the last page)
    /// is valid: it is empty and reported as last.
    pub fn validate(&self) -> Result<(), String> {
        if self.items.len() > self.page_size as usize {
            return Err(format!(
                "page holds {} items but its size is {}",
                self.items.len(),
                self.page_size
            ));
        }

        if self.is_first != (self.page_index == 0) {
            return Err(format!(
                "page {} reported first={}",
                self.page_index, self.is_first
            ));
        }

        if self.total_pages > 0 && self.page_index == self.total_pages - 1 && !self.is_last {
            return Err(format!(
                "page {} of {} not reported as last",
                self.page_index, self.total_pages
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::PageResult;

    fn page(items: usize, page_index: u32, total_pages: u32) -> PageResult<usize> {
        PageResult {
            items: (0..items).collect(),
            page_index,
            page_size: 10,
            total_elements: 25,
            total_pages,
            is_first: page_index == 0,
            is_last: page_index + 1 >= total_pages,
        }
    }

    #[test]
    fn test_validate_accepts_regular_pages() {
        assert!(page(10, 0, 3).validate().is_ok());
        assert!(page(10, 1, 3).validate().is_ok());
        assert!(page(5, 2, 3).validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_empty_page_past_the_end() {
        assert!(page(0, 3, 3).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_page() {
        assert!(page(11, 0, 3).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_wrong_flags() {
        let mut result = page(5, 2, 3);
        result.is_last = false;
        assert!(result.validate().is_err());

        let mut result = page(10, 1, 3);
        result.is_first = true;
        assert!(result.validate().is_err());
    }
}
