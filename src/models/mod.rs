// Model exports
pub mod document;
pub mod domain;
pub mod requests;
pub mod responses;

pub use document::DocumentShape;
pub use domain::{Partner, PartnerFilters, PartnerLevel, RawProfile, RequesterProfile, ScoringWeights, SkillTier, StyleEntry};
pub use requests::SearchPartnersRequest;
pub use responses::{SearchPartnersResponse, StylesResponse, HealthResponse, ErrorResponse};
