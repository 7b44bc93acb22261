//! Data models for the jokebox application.
//!
//! This module contains all the core data structures used throughout the application:
//! - [`SessionState`]: The central state container holding the active selection and display phase
//! - [`SelectionState`] / [`Category`]: The language/category filter applied to joke requests
//! - [`RemoteJoke`] / [`JokeResult`]: Provider wire shapes and the typed outcome of a request
//! - [`UserConfig`]: User preferences loaded from `Jokebox Config.yaml`
//!
//! # Architecture Note
//!
//! The models are designed to be:
//! - **Serializable**: Config structs derive `Serialize`/`Deserialize` for YAML persistence
//! - **Cloneable**: SessionState is wrapped in `Arc<RwLock<>>` by [`StateManager`](crate::state::StateManager)
//! - **Passive**: State updates go through StateManager's `update()` method so change events fire

pub mod config;
pub mod joke;
pub mod selection;
pub mod session;

pub use config::{JokeboxSettings, UserConfig};
pub use joke::{
    FETCH_FAILED_MESSAGE, JokeResult, NO_CUSTOM_JOKES_MESSAGE, RemoteJoke, TWOPART_SEPARATOR,
};
pub use selection::{CUSTOM_CATEGORY, Category, SelectionState, is_valid_language_code};
pub use session::{DisplayPhase, SessionState};
