//! Editor entry points: `/editor`, `/editor/{projectId}` and
//! `/editor?template={templateId}`.

use crate::catalog;
use crate::error::AppError;

pub const GALLERY_PATH: &str = "/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorTarget {
	Blank,
	Project(u32),
	Template(u32),
}

impl EditorTarget {
	pub fn path(self) -> String {
		match self {
			EditorTarget::Blank => "/editor".into(),
			EditorTarget::Project(id) => format!("/editor/{id}"),
			EditorTarget::Template(id) => format!("/editor?template={id}"),
		}
	}

	/// Resolves route parameters against the catalog. A project id in the
	/// path takes precedence over a template query.
	pub fn resolve(project_id: Option<&str>, template_id: Option<&str>) -> Result<Self, AppError> {
		if let Some(raw) = project_id {
			let id = parse_id(raw).ok_or_else(|| AppError::InvalidProjectId(raw.into()))?;
			return catalog::project(id)
				.map(|p| EditorTarget::Project(p.id))
				.ok_or(AppError::UnknownProject(id));
		}
		if let Some(raw) = template_id {
			let id = parse_id(raw).ok_or_else(|| AppError::InvalidTemplateId(raw.into()))?;
			return catalog::template(id)
				.map(|t| EditorTarget::Template(t.id))
				.ok_or(AppError::UnknownTemplate(id));
		}
		Ok(EditorTarget::Blank)
	}

	pub fn title(self) -> String {
		match self {
			EditorTarget::Project(id) => catalog::project(id)
				.map(|p| p.title.to_owned())
				.unwrap_or_else(|| "Untitled Mind Map".into()),
			EditorTarget::Template(id) => catalog::template(id)
				.map(|t| format!("{} Mind Map", t.name))
				.unwrap_or_else(|| "Untitled Mind Map".into()),
			EditorTarget::Blank => "Untitled Mind Map".into(),
		}
	}

	pub fn collaborators(self) -> u32 {
		match self {
			EditorTarget::Project(id) => catalog::project(id).map_or(1, |p| p.collaborators),
			_ => 1,
		}
	}
}

fn parse_id(raw: &str) -> Option<u32> {
	raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn paths_follow_the_navigation_surface() {
		assert_eq!(EditorTarget::Blank.path(), "/editor");
		assert_eq!(EditorTarget::Project(3).path(), "/editor/3");
		assert_eq!(EditorTarget::Template(2).path(), "/editor?template=2");
	}

	#[test]
	fn no_parameters_opens_a_blank_canvas() {
		assert_eq!(EditorTarget::resolve(None, None), Ok(EditorTarget::Blank));
	}

	#[test]
	fn known_ids_resolve() {
		assert_eq!(
			EditorTarget::resolve(Some("1"), None),
			Ok(EditorTarget::Project(1))
		);
		assert_eq!(
			EditorTarget::resolve(None, Some("4")),
			Ok(EditorTarget::Template(4))
		);
	}

	#[test]
	fn project_wins_over_template() {
		assert_eq!(
			EditorTarget::resolve(Some("2"), Some("1")),
			Ok(EditorTarget::Project(2))
		);
	}

	#[test]
	fn bad_ids_are_reported() {
		assert_eq!(
			EditorTarget::resolve(Some("abc"), None),
			Err(AppError::InvalidProjectId("abc".into()))
		);
		assert_eq!(
			EditorTarget::resolve(Some("42"), None),
			Err(AppError::UnknownProject(42))
		);
		assert_eq!(
			EditorTarget::resolve(None, Some("-1")),
			Err(AppError::InvalidTemplateId("-1".into()))
		);
		assert_eq!(
			EditorTarget::resolve(None, Some("9")),
			Err(AppError::UnknownTemplate(9))
		);
	}

	#[test]
	fn titles_come_from_the_catalog() {
		assert_eq!(EditorTarget::Project(1).title(), "Product Strategy 2024");
		assert_eq!(EditorTarget::Template(3).title(), "Study Guide Mind Map");
		assert_eq!(EditorTarget::Blank.title(), "Untitled Mind Map");
		assert_eq!(EditorTarget::Project(2).collaborators(), 5);
	}
}
