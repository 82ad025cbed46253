/// Data Transfer Objects for application layer
mod analysis_request;
mod analysis_response;
mod provider_selection;
mod report_format;

pub use analysis_request::{AnalysisRequest, AnalysisRequestBuilder};
pub use analysis_response::AnalysisResponse;
pub use provider_selection::ProviderSelection;
pub use report_format::ReportFormat;
