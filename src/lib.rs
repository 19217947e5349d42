pub mod client;
pub mod domain;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod services;

/// Rows shown per admin list page.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Uniform cap on uploaded images, enforced before any network call.
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;
