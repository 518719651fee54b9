//! Saved browsing position.
//!
//! The storefront remembers the last branch and category a visitor opened so a
//! return visit to `/` lands where they left off. The state captures catalog
//! positions together with the names seen at the time: if the menu changes
//! underneath a saved position, [`NavigationState::resolve`] falls back to the
//! deepest level that still matches instead of showing a different dish list.

use serde::{Deserialize, Serialize};

use crate::catalog::{Branch, Catalog, Category};
use crate::types::{BranchIndex, CategoryIndex};

/// A catalog position plus the name it had when saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot<I> {
    pub index: I,
    pub name: String,
}

/// Last visited branch and category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    #[serde(default)]
    pub current_branch: Option<Snapshot<BranchIndex>>,
    #[serde(default)]
    pub current_category: Option<Snapshot<CategoryIndex>>,
}

/// One of the three storefront screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Branches,
    Categories(BranchIndex),
    Products(BranchIndex, CategoryIndex),
}

impl NavigationState {
    /// Nothing selected: the branch list.
    #[must_use]
    pub fn branch_selection() -> Self {
        Self::default()
    }

    /// A branch is open, no category yet.
    #[must_use]
    pub fn categories(index: BranchIndex, branch: &Branch) -> Self {
        Self {
            current_branch: Some(Snapshot {
                index,
                name: branch.name.clone(),
            }),
            current_category: None,
        }
    }

    /// A category of a branch is open.
    #[must_use]
    pub fn products(
        branch_index: BranchIndex,
        branch: &Branch,
        category_index: CategoryIndex,
        category: &Category,
    ) -> Self {
        Self {
            current_branch: Some(Snapshot {
                index: branch_index,
                name: branch.name.clone(),
            }),
            current_category: Some(Snapshot {
                index: category_index,
                name: category.name.clone(),
            }),
        }
    }

    /// Map the saved position onto the live catalog.
    #[must_use]
    pub fn resolve(&self, catalog: &Catalog) -> View {
        let Some(saved_branch) = &self.current_branch else {
            return View::Branches;
        };
        let branch_matches = catalog
            .branch(saved_branch.index)
            .is_some_and(|branch| branch.name == saved_branch.name);
        if !branch_matches {
            return View::Branches;
        }

        match &self.current_category {
            Some(saved_category)
                if catalog
                    .category(saved_branch.index, saved_category.index)
                    .is_some_and(|category| category.name == saved_category.name) =>
            {
                View::Products(saved_branch.index, saved_category.index)
            }
            _ => View::Categories(saved_branch.index),
        }
    }

    /// The saved branch, if it still resolves against the live catalog.
    #[must_use]
    pub fn branch<'a>(&self, catalog: &'a Catalog) -> Option<&'a Branch> {
        match self.resolve(catalog) {
            View::Branches => None,
            View::Categories(branch) | View::Products(branch, _) => catalog.branch(branch),
        }
    }
}

impl View {
    /// The screen the back button leads to.
    #[must_use]
    pub const fn back(self) -> Self {
        match self {
            Self::Branches | Self::Categories(_) => Self::Branches,
            Self::Products(branch, _) => Self::Categories(branch),
        }
    }

    /// URL path of the screen.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Branches => "/branches".to_string(),
            Self::Categories(branch) => format!("/branches/{branch}"),
            Self::Products(branch, category) => {
                format!("/branches/{branch}/categories/{category}")
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{"branches": [
                {"name": "Центр", "categories": [
                    {"name": "Шаурма"},
                    {"name": "Напитки"}
                ]},
                {"name": "Север"}
            ]}"#,
        )
        .unwrap()
    }

    fn products_state(catalog: &Catalog, b: usize, c: usize) -> NavigationState {
        let branch = &catalog.branches[b];
        NavigationState::products(
            BranchIndex::new(b),
            branch,
            CategoryIndex::new(c),
            &branch.categories()[c],
        )
    }

    #[test]
    fn test_empty_state_resolves_to_branches() {
        assert_eq!(
            NavigationState::branch_selection().resolve(&catalog()),
            View::Branches
        );
    }

    #[test]
    fn test_branch_only_resolves_to_categories() {
        let catalog = catalog();
        let state = NavigationState::categories(BranchIndex::new(1), &catalog.branches[1]);
        assert_eq!(state.resolve(&catalog), View::Categories(BranchIndex::new(1)));
    }

    #[test]
    fn test_branch_and_category_resolve_to_products() {
        let catalog = catalog();
        let state = products_state(&catalog, 0, 1);
        assert_eq!(
            state.resolve(&catalog),
            View::Products(BranchIndex::new(0), CategoryIndex::new(1))
        );
    }

    #[test]
    fn test_renamed_category_falls_back_to_categories() {
        let catalog = catalog();
        let mut state = products_state(&catalog, 0, 1);
        state.current_category.as_mut().unwrap().name = "Десерты".to_string();
        assert_eq!(state.resolve(&catalog), View::Categories(BranchIndex::new(0)));
    }

    #[test]
    fn test_missing_branch_falls_back_to_branches() {
        let catalog = catalog();
        let mut state = products_state(&catalog, 0, 0);
        state.current_branch.as_mut().unwrap().index = BranchIndex::new(7);
        assert_eq!(state.resolve(&catalog), View::Branches);
    }

    #[test]
    fn test_saved_branch_lookup() {
        let catalog = catalog();
        let state = products_state(&catalog, 0, 1);
        assert_eq!(state.branch(&catalog).unwrap().name, "Центр");

        assert!(NavigationState::branch_selection().branch(&catalog).is_none());

        let mut stale = state;
        stale.current_branch.as_mut().unwrap().name = "Юг".to_string();
        assert!(stale.branch(&catalog).is_none());
    }

    #[test]
    fn test_back_walks_up_one_level() {
        let b = BranchIndex::new(2);
        let c = CategoryIndex::new(3);
        assert_eq!(View::Products(b, c).back(), View::Categories(b));
        assert_eq!(View::Categories(b).back(), View::Branches);
        assert_eq!(View::Branches.back(), View::Branches);
    }

    #[test]
    fn test_paths() {
        let b = BranchIndex::new(2);
        let c = CategoryIndex::new(3);
        assert_eq!(View::Branches.path(), "/branches");
        assert_eq!(View::Categories(b).path(), "/branches/2");
        assert_eq!(View::Products(b, c).path(), "/branches/2/categories/3");
    }

    #[test]
    fn test_serialized_field_names() {
        let catalog = catalog();
        let json = serde_json::to_value(products_state(&catalog, 0, 0)).unwrap();
        assert_eq!(json["currentBranch"]["name"], "Центр");
        assert_eq!(json["currentCategory"]["index"], 0);
    }
}
