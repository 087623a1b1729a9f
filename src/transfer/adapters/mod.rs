//! Endpoint adapters - concrete `AssetEndpoint` implementations

pub mod ledger;
pub mod mock;
pub mod traits;

pub use traits::AssetEndpoint;

// HTTP-backed ledger endpoint (production)
pub use ledger::LedgerEndpoint;

// Scriptable endpoint for tests
pub use mock::{MockEndpoint, Plan};
