use crate::{
    CampaignId, CompanyId, DiscountCodeId, ProductId, PromotionId, VendorId,
};
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// A company selling through the platform. Only admins list vendors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub company_id: CompanyId,
    pub company_name: String,
    pub contact_email: String,
    pub status: VendorStatus,
    /// Subscription plan name, if the vendor is subscribed.
    pub plan: Option<String>,
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorStatus {
    Active,
    Pending,
    Suspended,
}

impl VendorStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Pending, Self::Suspended];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Suspended => "suspended",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Suspended => "Suspended",
        }
    }
}

/// A review-collection campaign run by a vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: CampaignId,
    pub company_id: CompanyId,
    pub title: String,
    pub description: Option<String>,
    pub status: CampaignStatus,
    #[serde(default)]
    pub reviews_collected: u32,
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub const ALL: [Self; 4] =
        [Self::Draft, Self::Active, Self::Paused, Self::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
        }
    }
}

/// An incentive offered to customers who leave a review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: PromotionId,
    pub company_id: CompanyId,
    pub title: String,
    /// Free-form offer kind, e.g. "free_gift" or "discount".
    pub offer_type: String,
    pub status: PromotionStatus,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionStatus {
    Scheduled,
    Active,
    Expired,
}

impl PromotionStatus {
    pub const ALL: [Self; 3] = [Self::Scheduled, Self::Active, Self::Expired];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Active => "active",
            Self::Expired => "expired",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Active => "Active",
            Self::Expired => "Expired",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub company_id: CompanyId,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: Decimal,
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountCode {
    pub id: DiscountCodeId,
    pub company_id: CompanyId,
    pub code: String,
    pub description: Option<String>,
    /// Percentage off, 0-100.
    pub percent_off: Decimal,
    pub status: DiscountCodeStatus,
    #[serde(default)]
    pub times_used: u32,
    pub expires_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountCodeStatus {
    Active,
    Disabled,
    Expired,
}

impl DiscountCodeStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Disabled, Self::Expired];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Disabled => "disabled",
            Self::Expired => "expired",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Disabled => "Disabled",
            Self::Expired => "Expired",
        }
    }
}

/// The list envelope as it appears on the wire.
///
/// Used by servers to produce responses. Clients go through
/// [`PageResult::from_json`] instead, which validates the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}

/// One validated page of items plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    /// Always at least 1.
    pub total_pages: u32,
}

impl<T> PageResult<T> {
    /// A single page holding exactly `items`.
    pub fn single_page(items: Vec<T>) -> Self {
        Self {
            total_count: items.len() as u64,
            total_pages: 1,
            items,
        }
    }
}

/// Ways a list response body can fail schema validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedPage {
    #[error("response body is not a JSON object")]
    NotAnObject,
    #[error("response has no `data` field")]
    MissingData,
    #[error("response `data` field is not an array")]
    DataNotArray,
    #[error("item {index} of `data` is invalid: {reason}")]
    InvalidItem { index: usize, reason: String },
    #[error("response field `{field}` is not a non-negative integer")]
    InvalidPagination { field: &'static str },
}

impl<T: DeserializeOwned> PageResult<T> {
    /// Validate a decoded JSON body against the list envelope.
    ///
    /// Missing `totalPages` defaults to 1 and missing `totalCount` defaults
    /// to the number of items returned.
    pub fn from_json(value: Value) -> Result<Self, MalformedPage> {
        let Value::Object(mut body) = value else {
            return Err(MalformedPage::NotAnObject);
        };

        let data = match body.remove("data") {
            None | Some(Value::Null) => return Err(MalformedPage::MissingData),
            Some(Value::Array(data)) => data,
            Some(_) => return Err(MalformedPage::DataNotArray),
        };

        let items = data
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item).map_err(|e| {
                    MalformedPage::InvalidItem {
                        index,
                        reason: e.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<T>, _>>()?;

        let total_pages = match optional_count(&body, "totalPages")? {
            Some(pages) => u32::try_from(pages)
                .map_err(|_| MalformedPage::InvalidPagination {
                    field: "totalPages",
                })?
                .max(1),
            None => 1,
        };
        let total_count = optional_count(&body, "totalCount")?
            .unwrap_or(items.len() as u64);

        Ok(Self {
            items,
            total_count,
            total_pages,
        })
    }
}

fn optional_count(
    body: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<Option<u64>, MalformedPage> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or(MalformedPage::InvalidPagination { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Row {
        id: u32,
    }

    #[test]
    fn missing_pagination_fields_get_defaults() {
        let page = PageResult::<Row>::from_json(
            json!({ "data": [{ "id": 1 }, { "id": 2 }] }),
        )
        .unwrap();
        assert_eq!(page.items, vec![Row { id: 1 }, Row { id: 2 }]);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_count, 2);
    }

    #[test]
    fn zero_total_pages_is_raised_to_one() {
        let page = PageResult::<Row>::from_json(
            json!({ "data": [], "totalPages": 0, "totalCount": 0 }),
        )
        .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn shape_errors_are_reported() {
        let err = |value| PageResult::<Row>::from_json(value).unwrap_err();

        assert_eq!(err(json!([1, 2])), MalformedPage::NotAnObject);
        assert_eq!(err(json!({ "items": [] })), MalformedPage::MissingData);
        assert_eq!(
            err(json!({ "data": { "id": 1 } })),
            MalformedPage::DataNotArray
        );
        assert!(matches!(
            err(json!({ "data": [{ "id": 1 }, { "id": "x" }] })),
            MalformedPage::InvalidItem { index: 1, .. }
        ));
        assert_eq!(
            err(json!({ "data": [], "totalPages": "many" })),
            MalformedPage::InvalidPagination {
                field: "totalPages"
            }
        );
    }
}
