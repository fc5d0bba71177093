pub mod checklist_parser;
pub mod checklist_serializer;

pub use checklist_parser::{LineToken, classify_line, parse_project};
pub use checklist_serializer::serialize_project;
