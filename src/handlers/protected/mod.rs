// handlers/protected/mod.rs - Article handlers
//
// Write routes are wrapped in the JWT guard at routing time (see app.rs);
// the guard passes everything through when auth is not required.

pub mod articles;
