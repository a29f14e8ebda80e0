// Interface layer: CLI wiring and output rendering
pub mod cli;
pub mod format;
