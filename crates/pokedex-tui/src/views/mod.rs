pub mod catalog_grid;
pub mod debug_console;
pub mod detail;
pub mod help;
pub mod pagination;
pub mod search_bar;
pub mod splash_screen;
pub mod status_bar;
