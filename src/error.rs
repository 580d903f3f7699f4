// Copyright (c) 2026 Pixelseal Contributors
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/pixelseal/pixelseal

//! Error types for container parsing and attack simulation.
//!
//! Cipher and codec operations are total over fixed-width integers and have
//! no error path; only the wire format and the attack front-end can fail.

use std::fmt;

/// Errors that can occur while reading the binary container format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// Input is too short to contain the 12-byte dimension header.
    TruncatedHeader(usize),
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedHeader(len) => {
                write!(f, "container too short for header: got {len} bytes, need 12")
            }
        }
    }
}

impl std::error::Error for ContainerError {}

/// Errors that can occur while setting up or running an attack simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackError {
    /// The requested attack kind is not one of `noise`, `bitflip`,
    /// `block_corruption`.
    UnsupportedKind(String),
    /// The input bytes are not a valid container.
    BadContainer(ContainerError),
}

impl fmt::Display for AttackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedKind(kind) => write!(f, "unsupported attack kind: {kind:?}"),
            Self::BadContainer(e) => write!(f, "invalid container: {e}"),
        }
    }
}

impl std::error::Error for AttackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BadContainer(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContainerError> for AttackError {
    fn from(e: ContainerError) -> Self {
        Self::BadContainer(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_truncated_header() {
        let err = ContainerError::TruncatedHeader(7);
        assert_eq!(
            format!("{err}"),
            "container too short for header: got 7 bytes, need 12"
        );
    }

    #[test]
    fn display_unsupported_kind() {
        let err = AttackError::UnsupportedKind("shear".into());
        assert_eq!(format!("{err}"), "unsupported attack kind: \"shear\"");
    }

    #[test]
    fn attack_error_wraps_container_error() {
        let err: AttackError = ContainerError::TruncatedHeader(0).into();
        assert!(matches!(
            err,
            AttackError::BadContainer(ContainerError::TruncatedHeader(0))
        ));
        assert!(std::error::Error::source(&err).is_some());
    }
}
