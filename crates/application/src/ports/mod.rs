mod appliance_gateway;
mod diagnostic_sink;

pub use appliance_gateway::ApplianceGateway;
pub use diagnostic_sink::DiagnosticSink;
