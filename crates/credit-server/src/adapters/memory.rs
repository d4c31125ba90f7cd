//! In-memory repository implementations used by tests

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use credit::{Credit, CreditRepository, Customer, CustomerRepository, DomainError};

/// Customer store keyed by id with a unique tax id
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    rows: Mutex<BTreeMap<i64, Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn save(&self, customer: &Customer) -> Result<Customer, DomainError> {
        let mut rows = self.rows.lock().unwrap();

        let duplicate = rows
            .values()
            .any(|c| c.cpf == customer.cpf && c.id != customer.id);
        if duplicate {
            return Err(DomainError::UniquenessViolation(format!(
                "cpf {} already registered",
                customer.cpf
            )));
        }

        let id = match customer.id {
            Some(id) => id,
            None => rows.keys().next_back().map_or(1, |last| last + 1),
        };
        let saved = Customer {
            id: Some(id),
            ..customer.clone()
        };
        rows.insert(id, saved.clone());

        Ok(saved)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

/// Credit store in insertion order
#[derive(Default)]
pub struct InMemoryCreditRepository {
    rows: Mutex<Vec<Credit>>,
    inserts: AtomicUsize,
}

impl InMemoryCreditRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CreditRepository for InMemoryCreditRepository {
    async fn insert(&self, credit: &Credit) -> Result<Credit, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        self.inserts.fetch_add(1, Ordering::SeqCst);

        let saved = Credit {
            id: Some(rows.len() as i64 + 1),
            ..credit.clone()
        };
        rows.push(saved.clone());

        Ok(saved)
    }

    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn find_by_credit_code(&self, credit_code: Uuid) -> Result<Option<Credit>, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.credit_code == credit_code)
            .cloned())
    }
}
