mod delegating_server;
mod stub_resolver;

pub use delegating_server::DelegatingServer;
pub use stub_resolver::StubResolver;
