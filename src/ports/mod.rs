/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only talks to the network, the file system and
/// the console through the outbound ports declared here.
pub mod outbound;
