pub use anyhow::{Context, Result};
pub use log::{debug, error, info, trace, warn};
