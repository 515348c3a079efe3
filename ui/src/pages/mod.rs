pub mod campaigns;
pub mod discount_codes;
pub mod not_found;
pub mod products;
pub mod promotions;
pub mod vendors;

pub use campaigns::CampaignsPage;
pub use discount_codes::DiscountCodesPage;
pub use not_found::NotFoundPage;
pub use products::ProductsPage;
pub use promotions::PromotionsPage;
pub use vendors::VendorsPage;
