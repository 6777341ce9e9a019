//! Assessment verification.
//!
//! Maps an assessment outcome (score, performance tier, skills, time spent)
//! to badge-mint inputs, invokes the minting service, and wraps the result
//! with assessment-specific fields and an evidence hash. Also builds the
//! human-auditable employer report.

pub mod error;
pub mod mapping;
pub mod report;
pub mod service;

pub use error::AssessmentError;
pub use mapping::{complexity_label, experience_points, market_value, salary_impact, tier_params, TierParams};
pub use report::{build_report, EmployerReport, PerformanceAnalysis, SkillBreakdown, SkillScore, VerificationReport};
pub use service::{evidence_facts, AssessmentVerificationService};
