//! @ai:module:intent Per-run result records and loading
//! @ai:module:layer domain
//! @ai:module:public_api RunResult, ResultLoader

pub mod loader;
pub mod run_result;

pub use loader::{ResultLoader, ResultLoaderTrait};
pub use run_result::RunResult;
