//! Hand-written test doubles.

pub mod mock_store;

pub use mock_store::MockStore;
