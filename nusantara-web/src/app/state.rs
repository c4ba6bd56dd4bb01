use nusantara_atlas::{AtlasAction, AtlasState};
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

/// Yew reducer wrapper around the core page state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PageState(pub AtlasState);

impl Reducible for PageState {
    type Action = AtlasAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let Self(state) = Rc::unwrap_or_clone(self);
        Rc::new(Self(state.apply(action)))
    }
}

impl Deref for PageState {
    type Target = AtlasState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub type PageHandle = UseReducerHandle<PageState>;

#[hook]
pub fn use_page_state() -> PageHandle {
    use_reducer(PageState::default)
}
