//! PainRx Core Library
//!
//! Drug recommendation engine over a small flat-file catalog.
//!
//! # Architecture
//!
//! ```text
//! catalog file ──load──▶ Catalog ──build──▶ InteractionIndex
//!                           │                     │
//!                           └───────┬─────────────┘
//!                                   ▼
//!                            Recommender
//!                    profile + pain list ──▶ backtracking search
//!                                   │ (no consistent assignment)
//!                                   ▼
//!                            greedy fallback
//!                                   │
//!                                   ▼
//!                     Recommendation ──▶ console / JSON report
//! ```
//!
//! # Core behavior
//!
//! The search assigns one drug per requested pain such that every drug is
//! individually eligible (age window, pregnancy, alcohol) and no two
//! assigned drugs are known to interact. When no fully consistent
//! assignment exists, the greedy fallback answers each pain independently
//! in a single forward pass and never fails.
//!
//! # Modules
//!
//! - [`catalog`]: record list plus the tab-delimited file store
//! - [`models`]: domain types (DrugRecord, UserProfile, Recommendation)
//! - [`interactions`]: symmetric drug-drug interaction index
//! - [`engine`]: backtracking search and greedy fallback
//! - [`report`]: JSON export of a finished recommendation

pub mod catalog;
pub mod engine;
pub mod interactions;
pub mod models;
pub mod report;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, CatalogResult};
pub use engine::Recommender;
pub use interactions::InteractionIndex;
pub use models::{
    DrugRecord, Outcome, PainAssignment, Recommendation, Strategy, UserProfile,
};
pub use report::RecommendationReport;
