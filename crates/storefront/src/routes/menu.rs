//! Menu browsing: branches → categories → products.
//!
//! Every screen has its own URL, so browser history and the back button work
//! without any client-side state. Opening a screen also records it as the
//! visitor's navigation state, which `/` uses to restore the last position.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use lavash_core::{
    Branch, BranchIndex, Category, CategoryIndex, NavigationState, Product, View,
};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::session::{load_navigation, save_navigation};
use crate::routes::layout::Layout;
use crate::state::AppState;

/// Branch card display data.
#[derive(Clone)]
pub struct BranchView {
    pub href: String,
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Category card display data.
#[derive(Clone)]
pub struct CategoryView {
    pub href: String,
    pub name: String,
    pub logo: String,
}

/// Product card display data.
#[derive(Clone)]
pub struct ProductView {
    pub index: usize,
    pub name: String,
    pub description: String,
    pub image: String,
    /// Base price, shown when the product is not listed by option.
    pub price: String,
    /// Price of the default add-to-cart button.
    pub button_price: String,
    /// Options are listed individually when there is more than one.
    pub lists_options: bool,
    pub options: Vec<OptionView>,
}

/// Product option display data.
#[derive(Clone)]
pub struct OptionView {
    pub index: usize,
    pub name: String,
    pub price: String,
}

impl BranchView {
    fn new(index: BranchIndex, branch: &Branch) -> Self {
        Self {
            href: View::Categories(index).path(),
            name: branch.name.clone(),
            address: branch.address.clone(),
            phone: branch.phone.clone(),
        }
    }
}

impl CategoryView {
    fn new(branch: BranchIndex, index: CategoryIndex, category: &Category) -> Self {
        Self {
            href: View::Products(branch, index).path(),
            name: category.name.clone(),
            logo: category.logo.clone(),
        }
    }
}

impl ProductView {
    fn new(index: usize, product: &Product) -> Self {
        Self {
            index,
            name: product.name.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            price: product.price.clone(),
            button_price: product.display_price().to_string(),
            lists_options: product.has_multiple_options(),
            options: product
                .options()
                .iter()
                .enumerate()
                .map(|(index, option)| OptionView {
                    index,
                    name: option.name.clone(),
                    price: option.price.clone(),
                })
                .collect(),
        }
    }
}

/// Branch selection page template.
#[derive(Template, WebTemplate)]
#[template(path = "menu/branches.html")]
pub struct BranchesTemplate {
    pub layout: Layout,
    pub branches: Vec<BranchView>,
    pub load_failed: bool,
}

/// Category grid page template.
#[derive(Template, WebTemplate)]
#[template(path = "menu/categories.html")]
pub struct CategoriesTemplate {
    pub layout: Layout,
    pub branch_name: String,
    pub back_href: String,
    pub categories: Vec<CategoryView>,
}

/// Product grid page template.
#[derive(Template, WebTemplate)]
#[template(path = "menu/products.html")]
pub struct ProductsTemplate {
    pub layout: Layout,
    pub category_name: String,
    pub back_href: String,
    pub branch_index: usize,
    pub category_index: usize,
    pub products: Vec<ProductView>,
}

/// Send the visitor back to where they left off.
#[instrument(skip(state, session))]
pub async fn restore(State(state): State<AppState>, session: Session) -> Redirect {
    let view = load_navigation(&session).await.resolve(state.catalog());
    tracing::debug!(?view, "Restoring navigation");
    Redirect::to(&view.path())
}

/// Display the branch list and forget the saved position.
#[instrument(skip(state, session))]
pub async fn branches(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    save_navigation(&session, &NavigationState::branch_selection()).await?;

    let branches = state
        .catalog()
        .branches
        .iter()
        .enumerate()
        .map(|(index, branch)| BranchView::new(BranchIndex::new(index), branch))
        .collect();

    Ok(BranchesTemplate {
        layout: Layout::load(&session, View::Branches.path()).await,
        branches,
        load_failed: state.catalog_unavailable(),
    })
}

/// Display the categories of a branch.
#[instrument(skip(state, session))]
pub async fn categories(
    State(state): State<AppState>,
    session: Session,
    Path(branch): Path<usize>,
) -> Result<impl IntoResponse> {
    let index = BranchIndex::new(branch);
    let branch = state
        .catalog()
        .branch(index)
        .ok_or_else(|| AppError::NotFound(format!("branch {index}")))?;

    save_navigation(&session, &NavigationState::categories(index, branch)).await?;

    let view = View::Categories(index);
    let categories = branch
        .categories()
        .iter()
        .enumerate()
        .map(|(c, category)| CategoryView::new(index, CategoryIndex::new(c), category))
        .collect();

    Ok(CategoriesTemplate {
        layout: Layout::load(&session, view.path()).await,
        branch_name: branch.name.clone(),
        back_href: view.back().path(),
        categories,
    })
}

/// Display the products of a category.
#[instrument(skip(state, session))]
pub async fn products(
    State(state): State<AppState>,
    session: Session,
    Path((branch, category)): Path<(usize, usize)>,
) -> Result<impl IntoResponse> {
    let branch_index = BranchIndex::new(branch);
    let category_index = CategoryIndex::new(category);
    let catalog = state.catalog();

    let branch = catalog
        .branch(branch_index)
        .ok_or_else(|| AppError::NotFound(format!("branch {branch_index}")))?;
    let category = catalog
        .category(branch_index, category_index)
        .ok_or_else(|| {
            AppError::NotFound(format!("category {category_index} of branch {branch_index}"))
        })?;

    save_navigation(
        &session,
        &NavigationState::products(branch_index, branch, category_index, category),
    )
    .await?;

    let view = View::Products(branch_index, category_index);
    let products = category
        .products()
        .iter()
        .enumerate()
        .map(|(index, product)| ProductView::new(index, product))
        .collect();

    Ok(ProductsTemplate {
        layout: Layout::load(&session, view.path()).await,
        category_name: category.name.clone(),
        back_href: view.back().path(),
        branch_index: branch_index.get(),
        category_index: category_index.get(),
        products,
    })
}
