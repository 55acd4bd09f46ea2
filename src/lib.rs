// Library exports for the binaries and integration tests
pub mod config;
pub mod i18n;
pub mod pages;
pub mod routing;
pub mod seo;
pub mod server;
