mod assertions;
mod helpers;
mod test_app;

// Re-export
pub use assertions::{assert_phase_sequence, assert_state_valid};
pub use helpers::*;
pub use test_app::{TestApp, TestAppBuilder};
