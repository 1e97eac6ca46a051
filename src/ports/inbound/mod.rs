/// Inbound ports (Driving ports) - Use case interfaces
pub mod risk_assessment_port;

pub use risk_assessment_port::RiskAssessmentPort;
