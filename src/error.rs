// SPDX-License-Identifier: GPL-3.0-or-later

use crate::data::DataError;
use std::{borrow::Cow, io};
use thiserror::Error;

/// Enumeration of different error types raised by this crate.
#[derive(Debug, Error)]
pub enum MyError {
    /// Data serialization/deserialization and parsing errors.
    #[error("General data error: {0}")]
    Data(
        #[doc(hidden)]
        #[from]
        DataError,
    ),

    /// Unexpected runtime error.
    #[error("{0}")]
    Runtime(#[doc(hidden)] Cow<'static, str>),

    /// I/O error.
    #[error("I/O error: {0}")]
    IO(
        #[doc(hidden)]
        #[from]
        io::Error,
    ),
}
