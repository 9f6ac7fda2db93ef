// Everything the integration tests drive without a terminal. The controller
// and rendering stay in the binary; only the session core is exported here.
pub mod dictionary;
pub mod generator;
pub mod metrics;
pub mod runtime;
pub mod session;
