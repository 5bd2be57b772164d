//! Path-to-route matching.
//!
//! Matching rules:
//! - An item whose `href` equals the module's base route matches only the
//!   base route itself (exact match at the root)
//! - Any other item matches its own `href` and every path below it, so
//!   `/hr/payroll/payslips/42` keeps `/hr/payroll/payslips` active
//! - Sections are scanned in list order; the first section holding any
//!   active item wins
//! - Within that section the most specific (longest) active href wins, so a
//!   detail route under `/hr/payroll/payslips` highlights the payslips item
//!   rather than its `/hr/payroll` parent; ties keep list order
//!
//! Everything here is a pure function over borrowed data.

use crate::keys::SectionKey;
use crate::nav::{NavItem, NavSection};

/// The first section/item pair matching a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    /// Position of the matched section in the input list.
    pub section_index: usize,
    /// The matched section.
    pub section: &'a NavSection,
    /// The matched item within the section.
    pub item: &'a NavItem,
}

/// Whether `href` should be highlighted while `path` is displayed.
pub fn is_active_path(path: &str, href: &str, base_route: &str) -> bool {
    if href == base_route {
        return path == base_route;
    }
    path == href
        || path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Find the first section/item pair active for `path`.
pub fn resolve_route<'a>(
    path: &str,
    sections: &'a [NavSection],
    base_route: &str,
) -> Option<RouteMatch<'a>> {
    sections
        .iter()
        .enumerate()
        .find_map(|(section_index, section)| {
            most_specific_item(path, section, base_route).map(|item| RouteMatch {
                section_index,
                section,
                item,
            })
        })
}

fn most_specific_item<'a>(path: &str, section: &'a NavSection, base_route: &str) -> Option<&'a NavItem> {
    section
        .items
        .iter()
        .filter(|item| is_active_path(path, &item.href, base_route))
        .fold(Option::<&'a NavItem>::None, |best, item| match best {
            Some(b) if b.href.len() >= item.href.len() => Some(b),
            _ => Some(item),
        })
}

/// Key of the first section containing an item active for `path`.
pub fn get_active_section<'a>(
    path: &str,
    sections: &'a [NavSection],
    base_route: &str,
) -> Option<&'a SectionKey> {
    resolve_route(path, sections, base_route).map(|m| &m.section.key)
}

/// Href of the item active for `path` within the active section, or `""`
/// when nothing matches.
pub fn get_active_href<'a>(path: &str, sections: &'a [NavSection], base_route: &str) -> &'a str {
    resolve_route(path, sections, base_route).map_or("", |m| m.item.href.as_str())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
