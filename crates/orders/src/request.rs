use serde::Serialize;

use orderflow_core::{DomainError, DomainResult};
use orderflow_customers::CustomerId;
use orderflow_products::ProductId;

/// One requested product line: which product and how many units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct RequestedProduct {
    product_id: ProductId,
    quantity: u64,
}

impl RequestedProduct {
    /// Quantity must be a positive integer.
    pub fn new(product_id: ProductId, quantity: i64) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::validation(format!(
                "quantity must be positive (product {product_id}, got {quantity})"
            )));
        }

        Ok(Self {
            product_id,
            quantity: quantity as u64,
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }
}

/// An order request: a customer and the products they want, in order.
///
/// Lines are kept exactly as requested; duplicates of the same product are
/// neither merged nor reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    customer_id: CustomerId,
    lines: Vec<RequestedProduct>,
}

impl OrderRequest {
    pub fn new(customer_id: CustomerId, lines: Vec<RequestedProduct>) -> Self {
        Self { customer_id, lines }
    }

    /// Build a request from raw identifiers, as received by an adapter.
    pub fn parse<S>(
        customer_id: &str,
        lines: impl IntoIterator<Item = (S, i64)>,
    ) -> DomainResult<Self>
    where
        S: AsRef<str>,
    {
        let customer_id: CustomerId = customer_id.parse()?;
        let lines = lines
            .into_iter()
            .map(|(product_id, quantity)| {
                let product_id: ProductId = product_id.as_ref().parse()?;
                RequestedProduct::new(product_id, quantity)
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self::new(customer_id, lines))
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn lines(&self) -> &[RequestedProduct] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Requested product ids without duplicates, in first-seen order.
    pub fn distinct_product_ids(&self) -> Vec<ProductId> {
        let mut ids: Vec<ProductId> = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            if !ids.contains(&line.product_id) {
                ids.push(line.product_id);
            }
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn non_positive_quantities_are_rejected() {
        for quantity in [0, -1, i64::MIN] {
            let err = RequestedProduct::new(ProductId::generate(), quantity).unwrap_err();
            match err {
                DomainError::Validation(msg) if msg.contains("quantity must be positive") => {}
                other => panic!("Expected validation error for {quantity}, got {other:?}"),
            }
        }
    }

    #[test]
    fn parse_builds_typed_request() {
        let customer_id = CustomerId::generate();
        let p1 = ProductId::generate();
        let p2 = ProductId::generate();

        let request = OrderRequest::parse(
            &customer_id.to_string(),
            vec![(p1.to_string(), 2), (p2.to_string(), 1)],
        )
        .unwrap();

        assert_eq!(request.customer_id(), customer_id);
        assert_eq!(request.lines().len(), 2);
        assert_eq!(request.lines()[0].product_id(), p1);
        assert_eq!(request.lines()[0].quantity(), 2);
        assert_eq!(request.lines()[1].product_id(), p2);
    }

    #[test]
    fn parse_rejects_malformed_ids() {
        let err = OrderRequest::parse("", Vec::<(String, i64)>::new()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(msg) if msg.starts_with("CustomerId")));

        let err = OrderRequest::parse(&CustomerId::generate().to_string(), vec![("nope", 1)])
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(msg) if msg.starts_with("ProductId")));
    }

    #[test]
    fn parse_allows_empty_product_list() {
        let request =
            OrderRequest::parse(&CustomerId::generate().to_string(), Vec::<(&str, i64)>::new())
                .unwrap();
        assert!(request.is_empty());
        assert!(request.distinct_product_ids().is_empty());
    }

    #[test]
    fn duplicates_are_kept_as_separate_lines() {
        let p = ProductId::generate();
        let q = ProductId::generate();
        let request = OrderRequest::new(
            CustomerId::generate(),
            vec![
                RequestedProduct::new(q, 1).unwrap(),
                RequestedProduct::new(p, 3).unwrap(),
                RequestedProduct::new(q, 3).unwrap(),
            ],
        );

        assert_eq!(request.lines().len(), 3);
        assert_eq!(request.distinct_product_ids(), vec![q, p]);
    }

    proptest! {
        #[test]
        fn positive_quantities_are_accepted(quantity in 1i64..=i64::MAX) {
            let line = RequestedProduct::new(ProductId::generate(), quantity).unwrap();
            prop_assert_eq!(line.quantity(), quantity as u64);
        }
    }
}
