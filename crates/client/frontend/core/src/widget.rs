//! Shared show/hide lifecycle for menu panels.

use crate::error::{ElementRole, MenuError};
use crate::ui::{NodeId, UiTree};

/// Externally observable panel state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Visibility lifecycle shared by menus.
///
/// Hiding never touches content: showing again without re-populating brings
/// back whatever was rendered last.
pub trait Lifecycle {
    fn show<T: UiTree + ?Sized>(&mut self, tree: &mut T);

    fn hide<T: UiTree + ?Sized>(&mut self, tree: &mut T);

    fn visibility(&self) -> Visibility;

    fn is_visible(&self) -> bool {
        self.visibility() == Visibility::Visible
    }

    fn toggle<T: UiTree + ?Sized>(&mut self, tree: &mut T) {
        if self.is_visible() {
            self.hide(tree);
        } else {
            self.show(tree);
        }
    }
}

/// Root container of a menu together with its visibility.
#[derive(Clone, Debug)]
pub struct Panel {
    root: NodeId,
    visibility: Visibility,
}

impl Panel {
    /// Resolves the root container by marker. Panels start hidden.
    pub fn attach<T: UiTree + ?Sized>(tree: &T, marker: &str) -> Result<Self, MenuError> {
        let root = tree
            .query(marker)
            .ok_or_else(|| MenuError::missing(ElementRole::Root, marker))?;

        Ok(Self {
            root,
            visibility: Visibility::Hidden,
        })
    }

    pub const fn root(&self) -> NodeId {
        self.root
    }
}

impl Lifecycle for Panel {
    fn show<T: UiTree + ?Sized>(&mut self, tree: &mut T) {
        tree.set_visible(self.root, true);
        self.visibility = Visibility::Visible;
    }

    fn hide<T: UiTree + ?Sized>(&mut self, tree: &mut T) {
        tree.set_visible(self.root, false);
        self.visibility = Visibility::Hidden;
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }
}
