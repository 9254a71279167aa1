pub mod upstream_arbiter;

pub use upstream_arbiter::UpstreamArbiter;
