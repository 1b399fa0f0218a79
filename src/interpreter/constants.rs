// Constants for the DFA-er interpreter

/// Largest identity emitted as a single character.
/// Anything above it, and any surrogate, is emitted as decimal text instead.
pub const CODE_POINT_MAX: u64 = 0x10_FFFF;

/// Default cap for recorded walk history (64 MiB)
pub const DEFAULT_HISTORY_LIMIT: usize = 64 * 1024 * 1024;
