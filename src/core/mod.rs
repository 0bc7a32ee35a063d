pub mod backend;
pub mod contact;
pub mod page;
pub mod showcase;

pub use crate::domain::model::ShowcaseResource;
pub use crate::domain::ports::{Backend, ConfigProvider};
pub use crate::utils::error::Result;
