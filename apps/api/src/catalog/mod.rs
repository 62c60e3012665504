// Catalog Loading
// Implements: file and HTTP sources, startup snapshotting, list/detail handlers.
// Fetch failures stop the boot; they never reach the engine or a request handler.

pub mod handlers;
pub mod snapshot;
pub mod source;
