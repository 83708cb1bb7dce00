//! Customer creation and lookup workflow.

use common::CustomerId;
use store::{CustomerRepository, NewCustomer};

use crate::dto::{CreateCustomerRequest, CustomerDto};
use crate::error::DomainError;
use crate::validation::validate_create_customer;

/// Service for managing customers.
pub struct CustomerService<S> {
    store: S,
}

impl<S: CustomerRepository> CustomerService<S> {
    /// Creates a new customer service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a customer: structural validation, then email uniqueness,
    /// then persistence.
    #[tracing::instrument(skip(self, req))]
    pub async fn create_customer(
        &self,
        req: CreateCustomerRequest,
    ) -> Result<CustomerDto, DomainError> {
        let violations = validate_create_customer(&req);
        if !violations.is_empty() {
            return Err(DomainError::Validation(violations));
        }

        if self.store.email_exists(&req.email).await? {
            return Err(DomainError::DuplicateEmail);
        }

        let created = self
            .store
            .insert_customer(NewCustomer {
                name: req.name,
                email: req.email,
                phone: req.phone,
            })
            .await?;

        metrics::counter!("customers_created_total").increment(1);
        tracing::info!(customer_id = %created.id, "customer created");

        Ok(created.into())
    }

    /// Looks up a customer's projection by id.
    #[tracing::instrument(skip(self))]
    pub async fn get_customer(&self, id: CustomerId) -> Result<Option<CustomerDto>, DomainError> {
        Ok(self.store.find_customer(id).await?.map(CustomerDto::from))
    }

    /// Lists all customers.
    #[tracing::instrument(skip(self))]
    pub async fn list_customers(&self) -> Result<Vec<CustomerDto>, DomainError> {
        let customers = self.store.all_customers().await?;
        Ok(customers.into_iter().map(CustomerDto::from).collect())
    }
}
