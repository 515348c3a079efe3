use crate::view::{Listable, SortKey};
use payloads::responses::{Campaign, DiscountCode, Product, Promotion, Vendor};

impl Listable for Vendor {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields =
            vec![self.company_name.as_str(), self.contact_email.as_str()];
        fields.extend(self.plan.as_deref());
        fields
    }

    fn category(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            "plan" => self.plan.as_deref(),
            _ => None,
        }
    }

    fn sort_key(&self, field: &str) -> Option<SortKey<'_>> {
        match field {
            "company_name" => Some(SortKey::Text(&self.company_name)),
            "contact_email" => Some(SortKey::Text(&self.contact_email)),
            "status" => Some(SortKey::Text(self.status.as_str())),
            "plan" => Some(SortKey::text(self.plan.as_deref())),
            "created_at" => Some(SortKey::Date(self.created_at)),
            _ => None,
        }
    }
}

impl Listable for Campaign {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.description.as_deref());
        fields
    }

    fn category(&self, field: &str) -> Option<&str> {
        (field == "status").then(|| self.status.as_str())
    }

    fn sort_key(&self, field: &str) -> Option<SortKey<'_>> {
        match field {
            "title" => Some(SortKey::Text(&self.title)),
            "status" => Some(SortKey::Text(self.status.as_str())),
            "reviews_collected" => {
                Some(SortKey::number(self.reviews_collected))
            }
            "created_at" => Some(SortKey::Date(self.created_at)),
            _ => None,
        }
    }
}

impl Listable for Promotion {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.offer_type.as_str()]
    }

    fn category(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            "offer_type" => Some(self.offer_type.as_str()),
            _ => None,
        }
    }

    fn sort_key(&self, field: &str) -> Option<SortKey<'_>> {
        match field {
            "title" => Some(SortKey::Text(&self.title)),
            "offer_type" => Some(SortKey::Text(&self.offer_type)),
            "status" => Some(SortKey::Text(self.status.as_str())),
            "starts_at" => Some(SortKey::Date(self.starts_at)),
            "ends_at" => Some(SortKey::Date(self.ends_at)),
            _ => None,
        }
    }
}

impl Listable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.sku.as_str(), self.category.as_str()]
    }

    fn category(&self, field: &str) -> Option<&str> {
        (field == "category").then_some(self.category.as_str())
    }

    fn sort_key(&self, field: &str) -> Option<SortKey<'_>> {
        match field {
            "name" => Some(SortKey::Text(&self.name)),
            "sku" => Some(SortKey::Text(&self.sku)),
            "category" => Some(SortKey::Text(&self.category)),
            "price" => Some(SortKey::Number(self.price)),
            "created_at" => Some(SortKey::Date(self.created_at)),
            _ => None,
        }
    }
}

impl Listable for DiscountCode {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.code.as_str()];
        fields.extend(self.description.as_deref());
        fields
    }

    fn category(&self, field: &str) -> Option<&str> {
        (field == "status").then(|| self.status.as_str())
    }

    fn sort_key(&self, field: &str) -> Option<SortKey<'_>> {
        match field {
            "code" => Some(SortKey::Text(&self.code)),
            "status" => Some(SortKey::Text(self.status.as_str())),
            "percent_off" => Some(SortKey::Number(self.percent_off)),
            "times_used" => Some(SortKey::number(self.times_used)),
            "expires_at" => Some(SortKey::Date(self.expires_at)),
            _ => None,
        }
    }
}
