pub mod config;
pub mod error;
pub mod events;
pub mod form;
pub mod processing {
    pub mod layout;
    pub mod thumbnail;
}
pub mod session;
pub mod tasks {
    pub mod loader;
    pub mod notifier;
    pub mod picker;
}
pub mod ui;
