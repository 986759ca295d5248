//! Common assertion helpers for project lists and command output

#![allow(dead_code)]

use den::core::git_state::GitState;
use den::core::project::Project;
use predicates::prelude::*;

/// Creates a predicate that checks for the reset confirmation
pub fn reset_confirmation() -> impl Predicate<str> {
    predicates::str::contains("Configuration has been reset.")
}

/// Creates a predicate that checks for the documented flags in help output
pub fn has_flags() -> impl Predicate<str> {
    predicates::str::contains("--reset").and(predicates::str::contains("--debug"))
}

pub fn find_project<'a>(projects: &'a [Project], name: &str) -> &'a Project {
    projects
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("project '{name}' not found in {projects:?}"))
}

pub fn assert_git_state(projects: &[Project], name: &str, expected: GitState) {
    let project = find_project(projects, name);
    assert_eq!(
        project.git_state, expected,
        "unexpected git state for '{name}'"
    );
}

pub fn project_names(projects: &[Project]) -> Vec<&str> {
    projects.iter().map(|p| p.name.as_str()).collect()
}
