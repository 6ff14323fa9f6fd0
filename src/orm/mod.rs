pub mod songs;

/// Backend checked by `check_for_backend` on every row type.
#[allow(dead_code)]
pub type Type = diesel::pg::Pg;
