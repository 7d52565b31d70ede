//! Errors from starting a run
//!
//! Pausing, resuming, stepping and stopping never fail; only `start` can,
//! and only before any run state is touched.

use crate::params::ParamError;
use crate::registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Params(#[from] ParamError),
}
