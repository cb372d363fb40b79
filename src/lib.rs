//! A terminal desktop of simulated browser windows.
//!
//! [`store::WindowStore`] holds the open windows and the shared input record;
//! [`desktop::Desktop`] draws them as browser panels and feeds terminal input
//! back into the store.

pub mod clipboard;
pub mod component_context;
pub mod components;
pub mod config;
pub mod desktop;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod keybindings;
pub mod layout;
pub mod runner;
pub mod store;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;
