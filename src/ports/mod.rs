/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are the use case interfaces driven by the CLI. Outbound
/// ports are the infrastructure interfaces the application core drives.
pub mod inbound;
pub mod outbound;
