//! Customer operations over whichever repository was configured.

use super::validation::RequestValidator;
use crate::config::ValidationPolicy;
use crate::error::AppError;
use crate::model::{Customer, NewCustomer};
use crate::repository::CustomerRepository;
use std::sync::Arc;

pub struct CustomerService {
    repo: Arc<dyn CustomerRepository>,
    policy: ValidationPolicy,
}

impl CustomerService {
    pub fn new(repo: Arc<dyn CustomerRepository>, policy: ValidationPolicy) -> Self {
        CustomerService { repo, policy }
    }

    pub async fn get(&self, id: i64) -> Result<Option<Customer>, AppError> {
        self.repo.get(id).await
    }

    /// Validate under the configured policy, then insert. Returns the new id.
    pub async fn create(&self, customer: NewCustomer) -> Result<i64, AppError> {
        if let Err(e) = RequestValidator::validate(&customer, self.policy) {
            tracing::warn!(error = %e, "customer rejected");
            return Err(e);
        }
        let id = self.repo.create(&customer).await?;
        tracing::info!(id, "customer created");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Address;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Keeps customers in a vec; ids are positions + 1.
    #[derive(Default)]
    struct MemoryRepository {
        rows: Mutex<Vec<NewCustomer>>,
    }

    #[async_trait]
    impl CustomerRepository for MemoryRepository {
        async fn get(&self, id: i64) -> Result<Option<Customer>, AppError> {
            let rows = self.rows.lock().unwrap();
            Ok(usize::try_from(id - 1)
                .ok()
                .and_then(|i| rows.get(i))
                .cloned()
                .map(|c| c.with_id(id)))
        }

        async fn create(&self, customer: &NewCustomer) -> Result<i64, AppError> {
            let mut rows = self.rows.lock().unwrap();
            rows.push(customer.clone());
            Ok(rows.len() as i64)
        }
    }

    fn customer(first: &str) -> NewCustomer {
        let address = Address {
            line1: "1 Main St".into(),
            line2: None,
            line3: None,
            line4: None,
            city: "London".into(),
            post_code: "AB1 2CD".into(),
            country: "UK".into(),
        };
        NewCustomer {
            first_name: first.into(),
            last_name: "Lovelace".into(),
            billing_address: address.clone(),
            shipping_address: address,
        }
    }

    #[tokio::test]
    async fn create_then_get() {
        let svc = CustomerService::new(Arc::new(MemoryRepository::default()), ValidationPolicy::Permissive);
        let id = svc.create(customer("Ada")).await.unwrap();
        assert_eq!(svc.get(id).await.unwrap(), Some(customer("Ada").with_id(id)));
        assert_eq!(svc.get(id + 1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn strict_policy_stops_insert() {
        let repo = Arc::new(MemoryRepository::default());
        let svc = CustomerService::new(repo.clone(), ValidationPolicy::Strict);
        let err = svc.create(customer("")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(repo.rows.lock().unwrap().is_empty());
    }
}
