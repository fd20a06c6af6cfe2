pub mod script;
pub mod trace_init;
pub mod unicode;

pub use script::{convert, translate, Direction, ScriptTable};
