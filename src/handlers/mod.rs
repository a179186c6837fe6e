// handlers/mod.rs - Handler tiers
//
// Public (no auth) → Protected (JWT auth when SECURITY_REQUIRE_AUTH is on)

pub mod public;    // /, /health, /api/login
pub mod protected; // /api/blog-articles[/:id]

/*
Directory structure:
src/
├── handlers/
│   ├── mod.rs              ← This file
│   ├── public/
│   │   ├── service.rs      ← GET / and GET /health
│   │   └── auth/
│   │       └── login.rs    ← POST /api/login
│   └── protected/
│       └── articles/
│           ├── list.rs     ← GET /api/blog-articles
│           ├── create.rs   ← POST /api/blog-articles
│           ├── show.rs     ← GET /api/blog-articles/:id
│           ├── update.rs   ← PATCH /api/blog-articles/:id
│           └── delete.rs   ← DELETE /api/blog-articles/:id
│
└── app.rs                  ← Routes and shared AppState
*/
