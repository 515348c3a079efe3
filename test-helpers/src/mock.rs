//! Sample data for the mock backend.
//!
//! Used by the dev server and by integration tests. Two companies are
//! modelled so company scoping can be observed: Acme (a vendor with enough
//! campaigns to span several pages) and Globex (a small one).

use jiff::{Timestamp, ToSpan};
use payloads::responses::{
    Campaign, CampaignStatus, DiscountCode, DiscountCodeStatus, Product,
    Promotion, PromotionStatus, Vendor, VendorStatus,
};
use payloads::{
    CampaignId, CompanyId, DiscountCodeId, ProductId, PromotionId, Role,
    SessionIdentity, UserId, VendorId,
};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::backend::Dataset;

pub const ACME_COMPANY: CompanyId = CompanyId(Uuid::from_u128(0xAC4E));
pub const GLOBEX_COMPANY: CompanyId = CompanyId(Uuid::from_u128(0x610B));

const ACME_CAMPAIGNS: usize = 23;

// 2025-01-01T00:00:00Z
const BASE_SECOND: i64 = 1_735_689_600;

fn days_after_base(days: i64) -> Option<Timestamp> {
    let base = Timestamp::from_second(BASE_SECOND).ok()?;
    base.checked_add(days.days()).ok()
}

fn id(namespace: u128, n: usize) -> Uuid {
    Uuid::from_u128((namespace << 64) | n as u128)
}

pub fn admin_session() -> SessionIdentity {
    SessionIdentity {
        user_id: UserId(id(0x05E5, 1)),
        email: "admin@reviewbrothers.com".into(),
        role: Role::Admin,
        company_id: None,
        is_company_owner: false,
    }
}

/// The owner of the Acme account.
pub fn vendor_session() -> SessionIdentity {
    SessionIdentity {
        user_id: UserId(id(0x05E5, 2)),
        email: "owner@acme.test".into(),
        role: Role::Vendor,
        company_id: Some(ACME_COMPANY),
        is_company_owner: true,
    }
}

pub fn sample_dataset() -> Dataset {
    Dataset {
        vendors: vendors(),
        campaigns: campaigns(),
        promotions: promotions(),
        products: products(),
        discount_codes: discount_codes(),
    }
}

/// Log what a dataset holds, for someone poking at the dev server.
pub fn print_summary(dataset: &Dataset) {
    use tracing::info;

    info!("📋 Sample data:");
    info!("   vendors:        {}", dataset.vendors.len());
    info!("   campaigns:      {}", dataset.campaigns.len());
    info!("   promotions:     {}", dataset.promotions.len());
    info!("   products:       {}", dataset.products.len());
    info!("   discount codes: {}", dataset.discount_codes.len());
    info!("   Acme company:   {}", ACME_COMPANY);
    info!("   Globex company: {}", GLOBEX_COMPANY);
}

fn vendors() -> Vec<Vendor> {
    [
        (ACME_COMPANY, "Acme Outdoor Gear", VendorStatus::Active, Some("Growth")),
        (GLOBEX_COMPANY, "Globex Kitchenware", VendorStatus::Active, Some("Starter")),
        (CompanyId(id(0xC0, 3)), "Initech Office Supply", VendorStatus::Pending, None),
        (CompanyId(id(0xC0, 4)), "Umbrella Pet Care", VendorStatus::Suspended, Some("Starter")),
    ]
    .into_iter()
    .enumerate()
    .map(|(n, (company_id, name, status, plan))| Vendor {
        id: VendorId(id(0x7E, n)),
        company_id,
        company_name: name.into(),
        contact_email: format!(
            "hello@{}.test",
            name.split_whitespace().next().unwrap_or("vendor").to_lowercase()
        ),
        status,
        plan: plan.map(Into::into),
        created_at: days_after_base(n as i64 * 17),
    })
    .collect()
}

fn campaigns() -> Vec<Campaign> {
    const TOPICS: [&str; 6] = [
        "Spring Launch",
        "Holiday Follow-up",
        "Loyalty Members",
        "Product Q&A",
        "Post-purchase",
        "Win-back",
    ];
    const STATUSES: [CampaignStatus; 4] = [
        CampaignStatus::Active,
        CampaignStatus::Draft,
        CampaignStatus::Paused,
        CampaignStatus::Completed,
    ];

    let acme = (0..ACME_CAMPAIGNS).map(|n| Campaign {
        id: CampaignId(id(0xCA, n)),
        company_id: ACME_COMPANY,
        title: format!("{} #{}", TOPICS[n % TOPICS.len()], n + 1),
        description: (n % 3 != 0)
            .then(|| format!("Review request wave {} for Acme", n + 1)),
        status: STATUSES[n % STATUSES.len()],
        reviews_collected: (n as u32 * 37) % 400,
        created_at: days_after_base(n as i64 * 3),
    });
    let globex = (0..2).map(|n| Campaign {
        id: CampaignId(id(0xCB, n)),
        company_id: GLOBEX_COMPANY,
        title: format!("Globex Kitchen Reviews {}", n + 1),
        description: None,
        status: CampaignStatus::Active,
        reviews_collected: 12 * (n as u32 + 1),
        created_at: days_after_base(40 + n as i64),
    });
    acme.chain(globex).collect()
}

fn promotions() -> Vec<Promotion> {
    [
        (ACME_COMPANY, "Free water bottle", "free_gift", PromotionStatus::Active),
        (ACME_COMPANY, "10% off next order", "discount", PromotionStatus::Scheduled),
        (ACME_COMPANY, "Summer raffle", "raffle", PromotionStatus::Expired),
        (GLOBEX_COMPANY, "Recipe e-book", "free_gift", PromotionStatus::Active),
    ]
    .into_iter()
    .enumerate()
    .map(|(n, (company_id, title, offer_type, status))| Promotion {
        id: PromotionId(id(0x9A, n)),
        company_id,
        title: title.into(),
        offer_type: offer_type.into(),
        status,
        starts_at: days_after_base(n as i64 * 10),
        ends_at: days_after_base(n as i64 * 10 + 30),
    })
    .collect()
}

fn products() -> Vec<Product> {
    [
        (ACME_COMPANY, "Trail Tent 2P", "AC-TENT-2", "camping", 24_900),
        (ACME_COMPANY, "Down Sleeping Bag", "AC-BAG-D", "camping", 18_950),
        (ACME_COMPANY, "Headlamp 400", "AC-LAMP-4", "lighting", 3_499),
        (ACME_COMPANY, "Camp Stove", "AC-STOVE", "cooking", 5_900),
        (GLOBEX_COMPANY, "Cast Iron Skillet", "GX-SKL-10", "cookware", 4_200),
    ]
    .into_iter()
    .enumerate()
    .map(|(n, (company_id, name, sku, category, cents))| Product {
        id: ProductId(id(0xB0, n)),
        company_id,
        name: name.into(),
        sku: sku.into(),
        category: category.into(),
        price: Decimal::new(cents, 2),
        created_at: days_after_base(n as i64 * 5),
    })
    .collect()
}

fn discount_codes() -> Vec<DiscountCode> {
    [
        (ACME_COMPANY, "REVIEW10", 10, DiscountCodeStatus::Active, 41),
        (ACME_COMPANY, "THANKS15", 15, DiscountCodeStatus::Active, 8),
        (ACME_COMPANY, "SPRING20", 20, DiscountCodeStatus::Expired, 120),
        (GLOBEX_COMPANY, "COOK5", 5, DiscountCodeStatus::Disabled, 0),
    ]
    .into_iter()
    .enumerate()
    .map(|(n, (company_id, code, percent, status, times_used))| {
        DiscountCode {
            id: DiscountCodeId(id(0xD1, n)),
            company_id,
            code: code.into(),
            description: Some(format!("{percent}% off for reviewers")),
            percent_off: Decimal::from(percent),
            status,
            times_used,
            expires_at: days_after_base(90 + n as i64 * 30),
        }
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_per_entity() {
        let dataset = sample_dataset();
        let mut ids: Vec<_> =
            dataset.campaigns.iter().map(|campaign| campaign.id).collect();
        ids.sort_by_key(|id| id.0);
        ids.dedup();
        assert_eq!(ids.len(), dataset.campaigns.len());
    }

    #[test]
    fn acme_campaigns_span_several_pages() {
        let acme = sample_dataset()
            .campaigns
            .into_iter()
            .filter(|campaign| campaign.company_id == ACME_COMPANY)
            .count();
        assert_eq!(acme, ACME_CAMPAIGNS);
        assert!(acme > 2 * payloads::requests::DEFAULT_PAGE_SIZE as usize);
    }
}
