use serde::{Deserialize, Serialize};

use orderflow_core::{aggregate_id_newtype, DomainError, DomainResult, Entity};

aggregate_id_newtype!(
    /// Customer identifier.
    CustomerId,
    "CustomerId"
);

/// Input for registering a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}

/// Customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: String,
}

impl Customer {
    /// Build a customer, validating name and email.
    ///
    /// Names are trimmed; emails are trimmed and lower-cased so lookups by
    /// email are case-insensitive.
    pub fn new(id: CustomerId, input: NewCustomer) -> DomainResult<Self> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let email = input.email.trim().to_lowercase();
        let valid_email = match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
            None => false,
        };
        if !valid_email {
            return Err(DomainError::validation(format!("invalid email: {:?}", input.email)));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            email,
        })
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn input(name: &str, email: &str) -> NewCustomer {
        NewCustomer {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn new_trims_and_normalizes() {
        let id = CustomerId::generate();
        let customer = Customer::new(id, input("  Ada Lovelace ", " Ada@Example.COM ")).unwrap();
        assert_eq!(customer.id_typed(), id);
        assert_eq!(customer.name(), "Ada Lovelace");
        assert_eq!(customer.email(), "ada@example.com");
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Customer::new(CustomerId::generate(), input("   ", "a@b.c")).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("name cannot be empty") => {}
            other => panic!("Expected validation error for blank name, got {other:?}"),
        }
    }

    #[test]
    fn email_without_at_is_rejected() {
        for bad in ["", "nobody", "@example.com", "someone@"] {
            let err = Customer::new(CustomerId::generate(), input("Ada", bad)).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "accepted {bad:?}");
        }
    }

    #[test]
    fn entity_id_matches_typed_id() {
        let id = CustomerId::generate();
        let customer = Customer::new(id, input("Ada", "ada@example.com")).unwrap();
        assert_eq!(*Entity::id(&customer), id);
    }

    #[test]
    fn serializes_with_plain_string_id() {
        let customer = Customer::new(CustomerId::generate(), input("Ada", "ada@example.com")).unwrap();
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["id"], serde_json::json!(customer.id_typed().to_string()));
        assert_eq!(json["email"], "ada@example.com");
    }

    proptest! {
        #[test]
        fn well_formed_inputs_are_accepted(
            name in "[A-Za-z][A-Za-z ]{0,40}",
            local in "[a-z0-9.]{1,16}",
            domain in "[a-z0-9]{1,16}\\.[a-z]{2,4}",
        ) {
            let email = format!("{local}@{domain}");
            let customer = Customer::new(CustomerId::generate(), input(&name, &email)).unwrap();
            prop_assert_eq!(customer.name(), name.trim());
            prop_assert_eq!(customer.email(), email.as_str());
        }
    }
}
