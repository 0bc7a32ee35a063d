pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{Settings, DEFAULT_BACKEND_URL};
pub use core::{
    backend::HttpBackend,
    contact::{ContactState, ContactSubmitter, Phase, SubmissionStatus, SubmitAttempt},
    page::PortfolioPage,
    showcase::ShowcaseLoader,
};
pub use domain::model::{
    Article, ContactField, ContactForm, ContentSource, LoadReport, Package, Project, Showcase,
};
pub use utils::error::{PortfolioError, Result};
