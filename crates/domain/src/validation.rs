//! Structural validators.
//!
//! Validator outcomes are data: each validator returns the full list of
//! violated rules for the payload shape, and the workflows decide how to
//! short-circuit. Cross-entity checks (existence, stock) live in the
//! workflows, not here.

use crate::dto::{CreateCustomerRequest, CreateOrderRequest, UpdateOrderStatusRequest};

/// A single violated validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub message: String,
}

impl Violation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Minimal email syntax check: one `@` with non-empty local and domain
/// parts and no whitespace.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
}

/// Validates a customer-creation payload.
pub fn validate_create_customer(req: &CreateCustomerRequest) -> Vec<Violation> {
    let mut violations = Vec::new();

    if req.name.trim().is_empty() {
        violations.push(Violation::new("Customer name is required"));
    }
    if req.name.chars().count() > 100 {
        violations.push(Violation::new("Name cannot exceed 100 characters"));
    }

    if req.email.trim().is_empty() {
        violations.push(Violation::new("Email is required"));
    } else if !is_valid_email(&req.email) {
        violations.push(Violation::new("Invalid email format"));
    }
    if req.email.chars().count() > 150 {
        violations.push(Violation::new("Email cannot exceed 150 characters"));
    }

    if req.phone.chars().count() > 20 {
        violations.push(Violation::new("Phone number cannot exceed 20 characters"));
    }

    violations
}

/// Validates an order-creation payload.
pub fn validate_create_order(req: &CreateOrderRequest) -> Vec<Violation> {
    let mut violations = Vec::new();

    if req.customer_id <= 0 {
        violations.push(Violation::new("Customer ID is required"));
    }

    if req.products.is_empty() {
        violations.push(Violation::new("Order must contain at least one product"));
    }

    for line in &req.products {
        if line.product_id <= 0 {
            violations.push(Violation::new("Product ID must be valid"));
        }
        if line.quantity <= 0 {
            violations.push(Violation::new("Quantity must be greater than 0"));
        }
    }

    violations
}

/// Validates a status-update payload against the closed status set.
pub fn validate_status_update(req: &UpdateOrderStatusRequest) -> Vec<Violation> {
    let mut violations = Vec::new();

    if req.status.trim().is_empty() {
        violations.push(Violation::new("Status is required"));
    } else if store::OrderStatus::parse(&req.status).is_none() {
        violations.push(Violation::new(
            "Status must be either 'Pending' or 'Delivered'",
        ));
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::OrderLineRequest;

    fn customer_req(name: &str, email: &str, phone: &str) -> CreateCustomerRequest {
        CreateCustomerRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    fn messages(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.message.as_str()).collect()
    }

    #[test]
    fn well_formed_customer_passes() {
        let violations = validate_create_customer(&customer_req("Ada", "a@x.com", "555-0100"));
        assert!(violations.is_empty());
    }

    #[test]
    fn empty_customer_reports_all_violated_rules() {
        let violations = validate_create_customer(&customer_req("", "", ""));
        assert_eq!(
            messages(&violations),
            vec!["Customer name is required", "Email is required"]
        );
    }

    #[test]
    fn overlong_fields_are_rejected() {
        let violations = validate_create_customer(&customer_req(
            &"x".repeat(101),
            &format!("{}@x.com", "y".repeat(150)),
            &"5".repeat(21),
        ));
        assert_eq!(
            messages(&violations),
            vec![
                "Name cannot exceed 100 characters",
                "Email cannot exceed 150 characters",
                "Phone number cannot exceed 20 characters",
            ]
        );
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["no-at-sign", "@x.com", "a@", "a b@x.com", "a@@x.com"] {
            let violations = validate_create_customer(&customer_req("Ada", email, ""));
            assert_eq!(messages(&violations), vec!["Invalid email format"], "{email}");
        }
    }

    #[test]
    fn well_formed_order_passes() {
        let req = CreateOrderRequest {
            customer_id: 1,
            products: vec![OrderLineRequest {
                product_id: 1,
                quantity: 2,
            }],
        };
        assert!(validate_create_order(&req).is_empty());
    }

    #[test]
    fn empty_order_reports_all_violated_rules() {
        let req = CreateOrderRequest {
            customer_id: 0,
            products: vec![],
        };
        assert_eq!(
            messages(&validate_create_order(&req)),
            vec![
                "Customer ID is required",
                "Order must contain at least one product",
            ]
        );
    }

    #[test]
    fn every_bad_line_is_reported() {
        let req = CreateOrderRequest {
            customer_id: 1,
            products: vec![
                OrderLineRequest {
                    product_id: 0,
                    quantity: 1,
                },
                OrderLineRequest {
                    product_id: 2,
                    quantity: 0,
                },
            ],
        };
        assert_eq!(
            messages(&validate_create_order(&req)),
            vec!["Product ID must be valid", "Quantity must be greater than 0"]
        );
    }

    #[test]
    fn status_must_be_in_the_closed_set() {
        let empty = UpdateOrderStatusRequest {
            status: String::new(),
        };
        assert_eq!(messages(&validate_status_update(&empty)), vec!["Status is required"]);

        let unknown = UpdateOrderStatusRequest {
            status: "Shipped".to_string(),
        };
        assert_eq!(
            messages(&validate_status_update(&unknown)),
            vec!["Status must be either 'Pending' or 'Delivered'"]
        );

        for status in ["Pending", "Delivered"] {
            let req = UpdateOrderStatusRequest {
                status: status.to_string(),
            };
            assert!(validate_status_update(&req).is_empty());
        }
    }
}
