//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the domain
//! gateways, so tests can swap storage without touching the handlers.

use std::sync::Arc;

use crate::domain::ports::RecordRepository;
use crate::domain::{Item, RecordGateway, User};

/// Gateways for every record kind.
#[derive(Clone)]
pub struct HttpState {
    pub items: RecordGateway<Item>,
    pub users: RecordGateway<User>,
}

impl HttpState {
    /// Build the state from one repository per kind.
    pub fn new(
        items: Arc<dyn RecordRepository<Item>>,
        users: Arc<dyn RecordRepository<User>>,
    ) -> Self {
        Self {
            items: RecordGateway::new(items),
            users: RecordGateway::new(users),
        }
    }
}
