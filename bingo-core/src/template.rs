//! Template cloning: a new board seeded from the live one with all
//! progress reset.

use crate::board::BoardState;
use crate::protocol::{create_request, CreateBoardRequest};

/// Name, password, and optional companion account for the clone.
#[derive(Debug, Clone, Default)]
pub struct TemplateSpec {
    pub name: String,
    pub title: String,
    pub password: String,
    pub username: Option<String>,
}

/// Build the create request for a template clone of `board`.
///
/// Structure (dimensions, contents, targets, units, order) is preserved;
/// `progress` and `completed` are reset. Skill tiles restart at level 0
/// when a username accompanies the clone (a fresh lookup will fill them
/// in) and at the neutral level 1 otherwise.
#[must_use]
pub fn template_request(board: &BoardState, spec: &TemplateSpec) -> CreateBoardRequest {
    let username = spec
        .username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty());
    let mut request = create_request(board, &spec.name, &spec.password, username);
    request.title = spec.title.trim().to_string();
    let reset_level = u32::from(username.is_none());
    for record in &mut request.tiles {
        record.progress = 0;
        record.completed = false;
        if record.mode == "skill" {
            record.current_level = Some(reset_level);
        }
    }
    request
}
