//! Elm-style core
//!
//! - **State** ([`state::AppState`]): all application state, split per concern
//! - **Message** ([`msg::Msg`]): domain events that change state
//! - **Update** ([`update::update`]): pure state transitions
//! - **Command** ([`cmd::Cmd`]): side-effect descriptions executed by the host
//! - **Translator** ([`translator::translate_raw_to_domain`]): raw terminal
//!   events to domain messages

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
