pub mod export_dialog;
pub mod mind_map;
