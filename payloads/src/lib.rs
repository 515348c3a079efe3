pub mod api_client;
pub mod requests;
pub mod responses;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use api_client::{APIClient, ClientError};
pub use responses::{MalformedPage, PageResult};

/// Id type wrappers help ensure we don't mix up ids for different entities.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct CompanyId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct VendorId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct CampaignId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct PromotionId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct ProductId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct DiscountCodeId(pub Uuid);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Vendor,
}

/// The signed-in user as seen by the dashboard.
///
/// This is owned by the identity backend. The dashboard only reads it to
/// decide which company's data to request and which controls to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub user_id: UserId,
    pub email: String,
    pub role: Role,
    /// Company the user belongs to. Admins usually have none.
    pub company_id: Option<CompanyId>,
    /// The first member of a company owns it and may manage its users.
    #[serde(default)]
    pub is_company_owner: bool,
}

impl SessionIdentity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Company to scope list requests to. Admins see every company.
    pub fn company_scope(&self) -> Option<CompanyId> {
        if self.is_admin() {
            None
        } else {
            self.company_id
        }
    }

    pub fn can_manage_users(&self) -> bool {
        self.is_admin() || self.is_company_owner
    }
}
