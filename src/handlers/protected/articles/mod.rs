// handlers/protected/articles/mod.rs - Blog article handlers
//
// CRUD over /api/blog-articles. Reads are public; create, update and delete
// sit behind the JWT guard when SECURITY_REQUIRE_AUTH is on.

pub mod create; // POST /api/blog-articles
pub mod delete; // DELETE /api/blog-articles/:id
pub mod list;   // GET /api/blog-articles
pub mod show;   // GET /api/blog-articles/:id
pub mod update; // PATCH /api/blog-articles/:id

pub use create::article_create;
pub use delete::article_delete;
pub use list::article_list;
pub use show::article_show;
pub use update::article_update;
