//! Everything needed to build and evaluate transforms.

pub use crate::error::{DhError, Result};
pub use crate::parameter::Parameter;
pub use crate::transform::{rot_x, rot_z, trans_x, trans_z, Evaluator, Transform};
