//! The demo page the binary operates on.
//!
//! One fixed component tree, small enough to read in the rendered
//! markup yet covering every interesting shape:
//!
//! ```text
//! page                        container
//! ├── order                   form
//! │   └── toppings            check group; round-trips its changes
//! │       ├── mushroom        check0, initially selected
//! │       ├── olive           check1
//! │       └── anchovy         check2, disabled
//! └── favorites               check group outside any form; renders
//!     │                       its own tag
//!     ├── cheddar             check3
//!     └── brie                check4
//! ```
//!
//! Wire tokens are allocated by the tree in attach order, so the
//! comments above are the tokens a submission actually carries.

use anyhow::Result;
use trellis_domain::{Component, ComponentId, ComponentTree};

/// The built demo tree plus the ids the binary steers by.
pub struct DemoPage {
    pub tree: ComponentTree<&'static str>,
    pub page: ComponentId,
    pub form: ComponentId,
    pub toppings: ComponentId,
    pub favorites: ComponentId,
}

/// Build the fixed demo page.
pub fn build_page() -> Result<DemoPage> {
    let mut tree = ComponentTree::new();
    let page = tree.attach_root(Component::container("page"));
    let form = tree.attach(page, Component::form("order"))?;

    let toppings = tree.attach(
        form,
        Component::check_group_with("toppings", vec!["mushroom"]).with_change_notifications(),
    )?;
    tree.attach(toppings, Component::check("mushroom", "mushroom"))?;
    tree.attach(toppings, Component::check("olive", "olive"))?;
    tree.attach(toppings, Component::check("anchovy", "anchovy").disabled())?;

    let favorites = tree.attach(
        page,
        Component::check_group("favorites").with_render_body_only(false),
    )?;
    tree.attach(favorites, Component::check("cheddar", "cheddar"))?;
    tree.attach(favorites, Component::check("brie", "brie"))?;

    Ok(DemoPage {
        tree,
        page,
        form,
        toppings,
        favorites,
    })
}
