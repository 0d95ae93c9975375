use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;

/// Returns a callback that asks every data-backed view to refetch.
#[hook]
pub fn use_refresh() -> Callback<()> {
    let dispatch = use_dispatch::<State>();
    Callback::from(move |_| {
        dispatch.reduce_mut(|state| state.request_refresh());
    })
}
