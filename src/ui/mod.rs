// User interface
// Interactive menu and command line front end over the rsa module

pub mod cli;
pub mod menu;

pub use cli::{Cli, Command};
pub use menu::{Menu, MenuChoice};
