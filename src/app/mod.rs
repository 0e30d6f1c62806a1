// Application layer - Use case interactors

pub mod container;
pub mod shrink_interactor;

// Re-export interactors
pub use container::DefaultAppContainer;
pub use shrink_interactor::{RunOutcome, ShrinkInteractor};
