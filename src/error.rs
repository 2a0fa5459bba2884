use thiserror::Error;

/// Signalled by lookups that require the key to be present.
///
/// Insertion and removal never raise this: inserting an existing key
/// overwrites its value, and removing an absent key is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("key not found")]
pub struct KeyError;
