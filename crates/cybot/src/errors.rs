//! Exit codes for the cybot binary.

/// Normal exit via the `exit` command.
pub const EXIT_SUCCESS: i32 = 0;

/// Content initialization failed past the one-shot recovery.
pub const EXIT_CONTENT_INIT_FAILED: i32 = 1;
