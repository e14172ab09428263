//! Hardcoded gallery and sidebar content. Nothing here is persisted.

use crate::components::mind_map::ColorTag;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectSummary {
	pub id: u32,
	pub title: &'static str,
	pub last_modified: &'static str,
	pub collaborators: u32,
	pub node_count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Template {
	pub id: u32,
	pub name: &'static str,
	pub description: &'static str,
	pub icon: &'static str,
	pub node_count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activity {
	pub text: &'static str,
	pub tone: ColorTag,
}

pub const RECENT_PROJECTS: &[ProjectSummary] = &[
	ProjectSummary {
		id: 1,
		title: "Product Strategy 2024",
		last_modified: "2 hours ago",
		collaborators: 3,
		node_count: 24,
	},
	ProjectSummary {
		id: 2,
		title: "Team Brainstorm Session",
		last_modified: "1 day ago",
		collaborators: 5,
		node_count: 18,
	},
	ProjectSummary {
		id: 3,
		title: "Learning Path: AI/ML",
		last_modified: "3 days ago",
		collaborators: 1,
		node_count: 32,
	},
];

pub const TEMPLATES: &[Template] = &[
	Template {
		id: 1,
		name: "Business Strategy",
		description: "Comprehensive business planning template",
		icon: "🎯",
		node_count: 15,
	},
	Template {
		id: 2,
		name: "Project Planning",
		description: "Organize project tasks and milestones",
		icon: "📋",
		node_count: 12,
	},
	Template {
		id: 3,
		name: "Study Guide",
		description: "Structure learning materials and concepts",
		icon: "📚",
		node_count: 20,
	},
	Template {
		id: 4,
		name: "Team Workshop",
		description: "Facilitate group brainstorming sessions",
		icon: "💡",
		node_count: 8,
	},
];

/// Labels offered in the editor sidebar; clicking one appends a node.
pub const AI_SUGGESTIONS: &[&str] = &[
	"🎯 Target Audience Analysis",
	"💰 Budget Planning",
	"📊 Performance Metrics",
	"🚀 Launch Timeline",
	"🤝 Partnership Opportunities",
	"📈 Growth Strategies",
];

pub const AI_RECOMMENDATIONS: &[&str] = &["📈 Q1 Performance Analysis", "🎨 Creative Campaign Ideas"];

pub const RECENT_ACTIVITY: &[Activity] = &[
	Activity {
		text: "Sarah added \"Budget Planning\"",
		tone: ColorTag::Success,
	},
	Activity {
		text: "AI suggested 3 new connections",
		tone: ColorTag::AiPrimary,
	},
	Activity {
		text: "Mike exported to PDF",
		tone: ColorTag::Accent,
	},
];

pub fn project(id: u32) -> Option<&'static ProjectSummary> {
	RECENT_PROJECTS.iter().find(|p| p.id == id)
}

pub fn template(id: u32) -> Option<&'static Template> {
	TEMPLATES.iter().find(|t| t.id == id)
}

/// Case-insensitive title filter; a blank query matches everything.
pub fn search_projects(query: &str) -> impl Iterator<Item = &'static ProjectSummary> + use<> {
	let needle = query.trim().to_lowercase();
	RECENT_PROJECTS
		.iter()
		.filter(move |p| p.title.to_lowercase().contains(&needle))
}
