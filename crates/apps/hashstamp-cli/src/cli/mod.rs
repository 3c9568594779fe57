pub mod app;
pub mod commands_check;
pub mod commands_inspect;
pub mod commands_mint;
pub mod output;
