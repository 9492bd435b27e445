//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for ticketdesk integration tests.

#![allow(dead_code)]

use app_lib::{add_ticket, create_app_state_in_memory, AppState, PivotViewResponse};
use engine::{ItemCatalog, TicketForm};

/// Test harness around an in-memory application state.
pub struct TestHarness {
    pub state: AppState,
}

impl TestHarness {
    /// Create a new test harness with an empty store and the default catalog.
    pub fn new() -> Self {
        TestHarness {
            state: create_app_state_in_memory(ItemCatalog::default()).unwrap(),
        }
    }

    /// Create a harness holding the support desk fixture.
    pub fn with_sample_data() -> Self {
        let harness = Self::new();
        for (number, item_type, quantity) in SupportFixture::entries() {
            harness.add(number, item_type, quantity);
        }
        harness
    }

    /// Add one ticket, panicking on failure.
    pub fn add(&self, number: &str, item_type: &str, quantity: &str) -> PivotViewResponse {
        add_ticket(&self.state, TicketForm::new(number, item_type, quantity))
            .unwrap_or_else(|e| panic!("add {} failed: {}", number, e))
    }

    pub fn stored_count(&self) -> usize {
        self.state.store.lock().unwrap().count().unwrap()
    }
}

/// A week of support desk requests.
pub struct SupportFixture;

impl SupportFixture {
    pub fn entries() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("SC-101", "Mouse Dell", "1"),
            ("SC-102", "Headset Jabra", "1"),
            ("SC-103", "Mouse Dell", "2"),
            ("SC-104", "Carregador de notebook Dell Type C", "1"),
            ("SC-105", "Mouse Dell", "1"),
            ("SC-106", "Headset Jabra", "1"),
            ("SC-107", "Pilhas AAA", "4"),
        ]
    }

    pub fn columns() -> Vec<&'static str> {
        vec![
            "Mouse Dell",
            "Headset Jabra",
            "Carregador de notebook Dell Type C",
            "Pilhas AAA",
            "Totals",
        ]
    }
}
