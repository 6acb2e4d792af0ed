pub mod config;
pub mod contact;
pub mod html;
pub mod i18n;
pub mod mail;
pub mod pages;
pub mod routes;
pub mod seo;
pub mod server;
pub mod sitemap;
