pub mod input_adapter;
pub mod snapshot;

pub use input_adapter::WinitInput;
pub use snapshot::InputSnapshot;
