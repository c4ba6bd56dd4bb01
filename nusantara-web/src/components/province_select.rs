use crate::i18n::t;
#[cfg(target_arch = "wasm32")]
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProvinceSelectProps {
    /// Province names, already sorted.
    pub options: Vec<AttrValue>,
    pub value: AttrValue,
    #[prop_or_default]
    pub on_change: Callback<String>,
}

#[function_component(ProvinceSelect)]
pub fn province_select(props: &ProvinceSelectProps) -> Html {
    let on_change = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(sel) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                    cb.emit(sel.value());
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&e, &cb);
            }
        })
    };
    html! {
        <div class="selector">
            <label for="provinceSelect">{ t("selector.label") }</label>
            <select id="provinceSelect" class="province-select" onchange={on_change}>
                { for props.options.iter().map(|name| {
                    html! {
                        <option value={name.clone()} selected={*name == props.value}>{ name.clone() }</option>
                    }
                })}
            </select>
        </div>
    }
}
