pub const DEFAULT_PAGE_SIZE: u32 = 10;

common_derives! {
    #[derive(Copy, Eq)]
    pub struct PageRequest {
        #[serde(default)]
        pub page: u32,
        #[serde(default = "default_size")]
        pub size: u32,
    }
}

fn default_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// A size of zero means "use the default".
    pub fn effective_size(&self) -> u32 {
        if self.size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.size
        }
    }

    pub fn as_query(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("size", self.effective_size().to_string()),
        ]
    }
}

common_derives! {
    /// The paginated envelope both adapters return for list endpoints.
    pub struct Page<T> {
        pub content: Vec<T>,
        pub total_elements: u64,
        pub total_pages: u32,
        pub size: u32,
        pub number: u32,
    }
}

impl<T> Page<T> {
    /// Cuts one page out of an already filtered and ordered list.
    pub fn from_items(items: Vec<T>, request: PageRequest) -> Self {
        let size = request.effective_size();
        let total_elements = items.len() as u64;
        let total_pages = total_elements.div_ceil(u64::from(size)) as u32;

        let start = (request.page as usize).saturating_mul(size as usize);
        let content = items
            .into_iter()
            .skip(start)
            .take(size as usize)
            .collect();

        Self {
            content,
            total_elements,
            total_pages,
            size,
            number: request.page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slicing() {
        let cases: &[(&str, usize, PageRequest, &[u32], u32)] = &[
            ("first_page", 25, PageRequest::new(0, 10), &[0, 9], 3),
            ("last_partial_page", 25, PageRequest::new(2, 10), &[20, 24], 3),
            ("past_the_end", 25, PageRequest::new(5, 10), &[], 3),
            ("zero_size_uses_default", 12, PageRequest::new(1, 0), &[10, 11], 2),
            ("empty", 0, PageRequest::default(), &[], 0),
        ];

        for (name, total, request, bounds, total_pages) in cases {
            let items: Vec<u32> = (0..*total as u32).collect();
            let page = Page::from_items(items, *request);

            assert_eq!(page.total_elements, *total as u64, "{name}");
            assert_eq!(page.total_pages, *total_pages, "{name}");
            assert_eq!(page.number, request.page, "{name}");
            match bounds {
                [] => assert!(page.content.is_empty(), "{name}"),
                [first, last] => {
                    assert_eq!(page.content.first(), Some(first), "{name}");
                    assert_eq!(page.content.last(), Some(last), "{name}");
                }
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn envelope_field_names() {
        let page = Page::from_items(vec!["a", "b", "c"], PageRequest::new(0, 2));
        let value = serde_json::to_value(&page).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "content": ["a", "b"],
                "totalElements": 3,
                "totalPages": 2,
                "size": 2,
                "number": 0
            })
        );
    }
}
