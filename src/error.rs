use thiserror::Error;

/// Failures resolving an editor route against the catalog.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
	#[error("\"{0}\" is not a valid project id")]
	InvalidProjectId(String),
	#[error("no project with id {0}")]
	UnknownProject(u32),
	#[error("\"{0}\" is not a valid template id")]
	InvalidTemplateId(String),
	#[error("no template with id {0}")]
	UnknownTemplate(u32),
}
