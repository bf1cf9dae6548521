//! Scan Session
//!
//! Caller-side view state. Lookups run without coordination, so each one is
//! issued a ticket and only the most recently initiated lookup may update
//! the view:
//!
//! ```text
//! Scanning ──begin_lookup──► LookingUp ──found──────► Viewing
//!    ▲                          │                        │
//!    │                          └──not found──► Registering
//!    └──────────────reset────────────────────────────────┘
//! ```

use shared::models::Product;

/// Identifies one lookup; only the latest ticket may complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LookupTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionView {
    /// Waiting for a barcode
    #[default]
    Scanning,
    LookingUp {
        ticket: LookupTicket,
        barcode: String,
    },
    Viewing(Product),
    /// No source knew the barcode; the registration form is open
    Registering { barcode: String },
}

/// Result of handing a finished lookup to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    Found,
    NotFound,
    /// A newer lookup was started, or the session was reset
    Stale,
}

#[derive(Debug, Default)]
pub struct ScanSession {
    view: SessionView,
    generation: u64,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &SessionView {
        &self.view
    }

    /// Start a lookup; any lookup still in flight becomes stale
    pub fn begin_lookup(&mut self, barcode: impl Into<String>) -> LookupTicket {
        self.generation += 1;
        let ticket = LookupTicket(self.generation);
        self.view = SessionView::LookingUp {
            ticket,
            barcode: barcode.into(),
        };
        ticket
    }

    pub fn is_current(&self, ticket: LookupTicket) -> bool {
        matches!(&self.view, SessionView::LookingUp { ticket: current, .. } if *current == ticket)
    }

    /// Apply a finished lookup. Results for stale tickets are discarded and
    /// leave the view unchanged.
    pub fn complete_lookup(&mut self, ticket: LookupTicket, result: Option<Product>) -> LookupOutcome {
        let barcode = match &self.view {
            SessionView::LookingUp {
                ticket: current,
                barcode,
            } if *current == ticket => barcode.clone(),
            _ => return LookupOutcome::Stale,
        };

        match result {
            Some(product) => {
                self.view = SessionView::Viewing(product);
                LookupOutcome::Found
            }
            None => {
                self.view = SessionView::Registering { barcode };
                LookupOutcome::NotFound
            }
        }
    }

    /// Barcode of the open registration form, if any
    pub fn registering(&self) -> Option<&str> {
        match &self.view {
            SessionView::Registering { barcode } => Some(barcode),
            _ => None,
        }
    }

    /// Show a freshly registered product as if it had been resolved.
    ///
    /// Returns `false` when no registration form is open.
    pub fn complete_registration(&mut self, product: Product) -> bool {
        if self.registering().is_none() {
            return false;
        }
        self.view = SessionView::Viewing(product);
        true
    }

    /// Back to scanning; in-flight lookups become stale
    pub fn reset(&mut self) {
        self.generation += 1;
        self.view = SessionView::Scanning;
    }
}
