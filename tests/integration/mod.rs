//! Integration tests for the skiff CLI

mod profile_commands;
mod start_flow;
mod test_utils;
