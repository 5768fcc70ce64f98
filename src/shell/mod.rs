//! Contains implementation of the interactive command shell.
pub(crate) mod command;
pub(crate) mod command_processor;
pub(crate) mod commands;
pub(crate) mod reply_sender;
