pub mod plot_configs;
pub mod axis;
pub mod data;
pub mod regions;
pub mod state;

// Re-export everything for compatibility
pub use plot_configs::*;
pub use axis::*;
pub use data::*;
pub use regions::*;
pub use state::*;
