// handlers/public/auth/mod.rs - Public authentication handlers

pub mod login; // POST /api/login - obtain a bearer token

pub use login::login_post;
