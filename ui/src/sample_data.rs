//! Rows shown when the backend returns nothing or can't be reached.
//!
//! They are illustrative only: the ids don't exist on the backend, and
//! pages treat edits to them as local.

use jiff::Timestamp;
use payloads::responses::{
    Campaign, CampaignStatus, DiscountCode, DiscountCodeStatus, Product,
    Promotion, PromotionStatus, Vendor, VendorStatus,
};
use payloads::{
    CampaignId, CompanyId, DiscountCodeId, ProductId, PromotionId, VendorId,
};
use rust_decimal::Decimal;
use uuid::Uuid;

const SAMPLE_COMPANY: CompanyId = CompanyId(Uuid::from_u128(0x5A3E));

fn sample_id(n: u128) -> Uuid {
    Uuid::from_u128(0x5A3E_0000 + n)
}

fn date(s: &str) -> Option<Timestamp> {
    s.parse().ok()
}

pub fn vendors() -> Vec<Vendor> {
    vec![
        Vendor {
            id: VendorId(sample_id(1)),
            company_id: CompanyId(sample_id(101)),
            company_name: "Northwind Coffee".into(),
            contact_email: "owner@northwind.example".into(),
            status: VendorStatus::Active,
            plan: Some("Growth".into()),
            created_at: date("2025-02-03T10:00:00Z"),
        },
        Vendor {
            id: VendorId(sample_id(2)),
            company_id: CompanyId(sample_id(102)),
            company_name: "Blue Harbor Candles".into(),
            contact_email: "hello@blueharbor.example".into(),
            status: VendorStatus::Pending,
            plan: None,
            created_at: date("2025-03-18T15:30:00Z"),
        },
        Vendor {
            id: VendorId(sample_id(3)),
            company_id: CompanyId(sample_id(103)),
            company_name: "Alpine Trail Supply".into(),
            contact_email: "team@alpinetrail.example".into(),
            status: VendorStatus::Suspended,
            plan: Some("Starter".into()),
            created_at: date("2024-11-21T08:15:00Z"),
        },
    ]
}

pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: CampaignId(sample_id(11)),
            company_id: SAMPLE_COMPANY,
            title: "Spring product reviews".into(),
            description: Some("Ask spring buyers for a photo review".into()),
            status: CampaignStatus::Active,
            reviews_collected: 128,
            created_at: date("2025-03-01T09:00:00Z"),
        },
        Campaign {
            id: CampaignId(sample_id(12)),
            company_id: SAMPLE_COMPANY,
            title: "Holiday follow-up".into(),
            description: None,
            status: CampaignStatus::Completed,
            reviews_collected: 342,
            created_at: date("2024-12-10T12:00:00Z"),
        },
        Campaign {
            id: CampaignId(sample_id(13)),
            company_id: SAMPLE_COMPANY,
            title: "Loyalty members survey".into(),
            description: Some("Draft for repeat customers".into()),
            status: CampaignStatus::Draft,
            reviews_collected: 0,
            created_at: None,
        },
    ]
}

pub fn promotions() -> Vec<Promotion> {
    vec![
        Promotion {
            id: PromotionId(sample_id(21)),
            company_id: SAMPLE_COMPANY,
            title: "Free tote for a review".into(),
            offer_type: "free_gift".into(),
            status: PromotionStatus::Active,
            starts_at: date("2025-04-01T00:00:00Z"),
            ends_at: date("2025-06-30T23:59:59Z"),
        },
        Promotion {
            id: PromotionId(sample_id(22)),
            company_id: SAMPLE_COMPANY,
            title: "15% off next order".into(),
            offer_type: "discount".into(),
            status: PromotionStatus::Scheduled,
            starts_at: date("2025-07-01T00:00:00Z"),
            ends_at: None,
        },
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId(sample_id(31)),
            company_id: SAMPLE_COMPANY,
            name: "Ceramic Pour-Over Set".into(),
            sku: "NW-POUR-01".into(),
            category: "brewing".into(),
            price: Decimal::new(4_500, 2),
            created_at: date("2025-01-15T10:00:00Z"),
        },
        Product {
            id: ProductId(sample_id(32)),
            company_id: SAMPLE_COMPANY,
            name: "House Blend 1kg".into(),
            sku: "NW-BEAN-1K".into(),
            category: "coffee".into(),
            price: Decimal::new(2_899, 2),
            created_at: date("2025-02-20T10:00:00Z"),
        },
        Product {
            id: ProductId(sample_id(33)),
            company_id: SAMPLE_COMPANY,
            name: "Travel Mug".into(),
            sku: "NW-MUG-TR".into(),
            category: "accessories".into(),
            price: Decimal::new(1_950, 2),
            created_at: None,
        },
    ]
}

pub fn discount_codes() -> Vec<DiscountCode> {
    vec![
        DiscountCode {
            id: DiscountCodeId(sample_id(41)),
            company_id: SAMPLE_COMPANY,
            code: "THANKYOU10".into(),
            description: Some("10% off for reviewers".into()),
            percent_off: Decimal::from(10),
            status: DiscountCodeStatus::Active,
            times_used: 57,
            expires_at: date("2025-12-31T23:59:59Z"),
        },
        DiscountCode {
            id: DiscountCodeId(sample_id(42)),
            company_id: SAMPLE_COMPANY,
            code: "SPRING25".into(),
            description: None,
            percent_off: Decimal::from(25),
            status: DiscountCodeStatus::Expired,
            times_used: 203,
            expires_at: date("2025-05-31T23:59:59Z"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use listing::{ListState, SortSpec};

    #[test]
    fn every_sample_set_has_rows() {
        assert!(!vendors().is_empty());
        assert!(!campaigns().is_empty());
        assert!(!promotions().is_empty());
        assert!(!products().is_empty());
        assert!(!discount_codes().is_empty());
    }

    #[test]
    fn sample_dates_parse() {
        assert!(campaigns()[0].created_at.is_some());
        assert!(discount_codes().iter().all(|code| code.expires_at.is_some()));
    }

    #[test]
    fn undated_campaign_sorts_first() {
        let campaigns = campaigns();
        let state = ListState::default().with_sort(SortSpec::asc("created_at"));
        let window = state.apply(&campaigns);
        assert_eq!(window.rows[0].title, "Loyalty members survey");
    }
}
