/// Rust's `!` is unstable. This empty enum is a stable equivalent, used as
/// the `Ok` type of loops that only return on error.
#[derive(Debug)]
pub enum Never {}
