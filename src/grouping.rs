//! Section grouping for the result panel.
//!
//! Results arrive best-first as a flat list. The panel shows them under their
//! section labels, with sections in order of first appearance. Each item keeps
//! its flat index so keyboard highlighting (which moves through the flat list)
//! lines up with what is rendered.

use serde::Serialize;

use crate::types::{DocEntry, LinkTarget};

/// Shown in an open panel that has nothing to list.
pub const EMPTY_RESULTS_MESSAGE: &str = "No results found. Try a different search term.";

/// One rendered result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupItem<'a> {
    /// Position in the flat result list.
    pub index: usize,
    pub active: bool,
    pub title: &'a str,
    pub description: &'a str,
    pub url: &'a str,
    pub target: LinkTarget,
}

/// Results sharing one section label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultGroup<'a> {
    pub section: &'a str,
    pub items: Vec<GroupItem<'a>>,
}

/// Group results by section, preserving first-appearance order of sections
/// and rank order within each section.
pub fn group_by_section(results: &[DocEntry], active: Option<usize>) -> Vec<ResultGroup<'_>> {
    let mut groups: Vec<ResultGroup<'_>> = Vec::new();

    for (index, entry) in results.iter().enumerate() {
        let item = GroupItem {
            index,
            active: active == Some(index),
            title: &entry.title,
            description: &entry.description,
            url: &entry.url,
            target: entry.link_target(),
        };

        match groups.iter_mut().find(|g| g.section == entry.section) {
            Some(group) => group.items.push(item),
            None => groups.push(ResultGroup {
                section: &entry.section,
                items: vec![item],
            }),
        }
    }

    groups
}
