//! Billing product catalog.

use serde::Serialize;
use utoipa::ToSchema;

/// Payment mode for a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    Payment,
    Subscription,
}

/// One product in the billing catalog.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BillingProduct {
    pub id: &'static str,
    pub price_id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mode: PaymentMode,
    pub price: &'static str,
    pub currency: &'static str,
}

const PRODUCTS: &[BillingProduct] = &[BillingProduct {
    id: "prod_SYu5W02FRl0eYD",
    price_id: "price_1RdmGzQotKuiqEGp17VctpVF",
    name: "Donation",
    description: "Support ScoreSweep development with a one-time donation",
    mode: PaymentMode::Payment,
    price: "$5.00",
    currency: "usd",
}];

/// Look up a product by its id. Unknown ids return None.
pub fn product_by_id(id: &str) -> Option<&'static BillingProduct> {
    PRODUCTS.iter().find(|product| product.id == id)
}

/// Look up a product by its price id. Unknown ids return None.
pub fn product_by_price_id(price_id: &str) -> Option<&'static BillingProduct> {
    PRODUCTS.iter().find(|product| product.price_id == price_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_by_id() {
        let donation = product_by_id("prod_SYu5W02FRl0eYD").unwrap();
        assert_eq!(donation.name, "Donation");
        assert_eq!(donation.price, "$5.00");
        assert_eq!(donation.mode, PaymentMode::Payment);

        assert!(product_by_id("prod_unknown").is_none());
    }

    #[test]
    fn test_product_by_price_id() {
        let donation = product_by_price_id("price_1RdmGzQotKuiqEGp17VctpVF").unwrap();
        assert_eq!(donation.id, "prod_SYu5W02FRl0eYD");

        assert!(product_by_price_id("price_unknown").is_none());
    }
}
