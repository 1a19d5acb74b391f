pub mod router;

pub use router::{ApiState, router};
