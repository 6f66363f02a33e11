//! The 6IXAI prompt-assembly core: option types, policy helpers, the domain
//! router, ~35 domain builders, and the top-level composer. Everything in
//! this module is pure, synchronous string composition — the HTTP and LLM
//! layers live elsewhere.

pub mod compose;
pub mod domains;
pub mod handlers;
pub mod policy;
pub mod router;
pub mod sections;
pub mod types;
