use crate::CompanyId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Query parameters shared by every list endpoint.
///
/// Unset fields are left out of the query string entirely, so two queries
/// compare equal exactly when they serialize to the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Free-text search, matched by the backend against the entity's
    /// textual fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Exact status filter, e.g. "active".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<CompanyId>,
}

impl ListQuery {
    pub fn for_company(company_id: Option<CompanyId>) -> Self {
        Self {
            company_id,
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page.max(1));
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size.clamp(1, MAX_PAGE_SIZE));
        self
    }

    /// Blank search text is treated as no search.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        let trimmed = search.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn with_status(mut self, status: Option<impl Into<String>>) -> Self {
        self.status = status.map(Into::into);
        self
    }

    /// Requested page, 1-indexed. Missing means the first page.
    pub fn page_or_first(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn page_size_or_default(&self) -> u32 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }
}
