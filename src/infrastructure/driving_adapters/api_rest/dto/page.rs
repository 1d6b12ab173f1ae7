//! Page DTO
//!
//! Serialized form of one listing page, with the echoed search query.

use serde::Serialize;

use crate::shared::pagination::Page;

/// One page of a listing response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub num_pages: usize,
    pub total_items: usize,
    pub is_paginated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl<T> PageDto<T> {
    /// Build a page DTO, mapping each domain item into its response form
    pub fn from_page<S>(page: Page<S>, query: Option<String>, map: impl Fn(S) -> T) -> Self {
        Self {
            page: page.number(),
            num_pages: page.num_pages(),
            total_items: page.total_items(),
            is_paginated: page.is_paginated(),
            items: page.into_items().into_iter().map(map).collect(),
            query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pagination::Paginator;

    #[test]
    fn page_metadata_survives_the_mapping() {
        let page = Paginator::new(5).paginate((1..=7).collect::<Vec<i32>>(), 2);
        let dto = PageDto::from_page(page, Some("q".to_string()), |n| n.to_string());

        assert_eq!(dto.items, vec!["6".to_string(), "7".to_string()]);
        assert_eq!(dto.page, 2);
        assert_eq!(dto.num_pages, 2);
        assert_eq!(dto.total_items, 7);
        assert!(dto.is_paginated);
        assert_eq!(dto.query.as_deref(), Some("q"));
    }

    #[test]
    fn absent_query_is_not_serialized() {
        let page = Paginator::new(5).paginate(vec![1], 1);
        let dto = PageDto::from_page(page, None, |n: i32| n);

        let json = serde_json::to_value(&dto).expect("serializable");
        assert!(json.get("query").is_none());
        assert_eq!(json["totalItems"], 1);
        assert_eq!(json["isPaginated"], false);
    }
}
