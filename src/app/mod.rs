pub mod launch;
pub mod shell;
