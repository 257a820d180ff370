// Life of a request:
// 1. OPTIONS preflight is answered globally, before route dispatch
// 2. Route dispatch: GET /health, POST /jwt, POST /DevOps
// 3. For issuance:
//     - Compare credentials (constant-time)
//     - Mint claims with a fresh transaction id and a fixed TTL
//     - Sign with HS256 and respond
//    For dispatch:
//     - API key gate, bearer token gate, payload validation
//     - Respond with the stub acknowledgement
//
// System components:
//  - Immutable configuration loaded from the environment
//  - HS256 token issuance/verification
//  - Stateless handlers; no storage, no shared mutable state

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;

mod e2e_tests;

pub use config::GatewayConfig;
pub use routes::router;
