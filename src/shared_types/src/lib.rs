//! Generated TypeScript bindings for `connect_status_core` live in `generated/`.
