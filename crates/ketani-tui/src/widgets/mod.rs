//! Ratatui widgets for the ketani TUI.

pub mod command_bar;
pub mod help;
pub mod nav_menu;
pub mod page_view;
pub mod policy_popup;
pub mod search_modal;
pub mod tab_bar;
