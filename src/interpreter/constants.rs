// Constants for the sorting stepper

/// Maximum number of live subroutine frames in one snapshot.
/// Quicksort on adversarial input recurses once per element, so this also
/// bounds the input size for the recursive variants.
pub const MAX_CALL_DEPTH: usize = 4096;

/// Number of buckets used by the bucket-based variants (one per decimal digit)
pub const BUCKET_COUNT: usize = 10;

/// Radix used to extract digits for bucket placement
pub const RADIX: i32 = 10;

/// Default estimated-memory limit for the snapshot history (256 MB)
pub const DEFAULT_HISTORY_LIMIT: usize = 256 * 1024 * 1024;

/// Largest input accepted by any algorithm; keeps every index representable
/// in the `i32` registers with room for `i + 2` style arithmetic
pub const MAX_ELEMENTS: usize = 1 << 20;
