use yew::prelude::*;

use shared::shared_crate_store::CrateInfo;

use crate::base::Base;
use crate::components::{CrateDetail, CrateStore};

/// Storefront landing page: the crate grid, with an inline detail
/// panel when a crate is selected.
#[function_component(Home)]
pub fn home() -> Html {
    let selected_crate = use_state(|| None::<CrateInfo>);

    let on_view_crate = {
        let selected_crate = selected_crate.clone();
        Callback::from(move |crate_info: CrateInfo| selected_crate.set(Some(crate_info)))
    };

    let on_close_detail = {
        let selected_crate = selected_crate.clone();
        Callback::from(move |_| selected_crate.set(None))
    };

    html! {
        <Base>
            {
                if let Some(crate_info) = &*selected_crate {
                    html! {
                        <CrateDetail
                            crate_info={crate_info.clone()}
                            on_close={on_close_detail}
                        />
                    }
                } else {
                    html! { <CrateStore on_view_crate={on_view_crate} /> }
                }
            }
        </Base>
    }
}
