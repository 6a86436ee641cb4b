pub mod mock;
pub mod sink;
pub mod traits;
pub mod types;

pub use mock::{CollectingSink, CombineCall, FitCall, MockGeometry};
pub use sink::*;
pub use traits::*;
pub use types::*;
