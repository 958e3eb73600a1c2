pub mod cipher;
pub mod config;
pub mod consts;
pub mod error;
pub mod history;
pub mod key;
pub mod mapper;
pub mod optimizer;
pub mod render;
pub mod scorer;
// cmd and reports are modules of the binary crate (main).
