//! Elm-style core of the feed client
//!
//! Terminal events and API completions arrive as [`raw_msg::RawMsg`], are
//! translated into domain [`msg::Msg`] values, and folded into
//! [`state::AppState`] by the pure [`update::update`] function. Side effects
//! leave the core as [`cmd::Cmd`] values run by [`cmd_executor::CmdExecutor`].

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
