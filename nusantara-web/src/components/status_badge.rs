use nusantara_atlas::classify;
use yew::prelude::*;

#[derive(Properties, PartialEq, Eq, Clone)]
pub struct StatusBadgeProps {
    pub id: AttrValue,
    pub status: AttrValue,
}

/// Conservation status label colored by its severity tier.
#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let tier = classify(&props.status);
    let class = classes!("badge", format!("badge-{}", tier.class()));
    html! {
        <span id={props.id.clone()} {class} role="status">{ props.status.clone() }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(status: &'static str) -> String {
        let props = StatusBadgeProps {
            id: "f_status".into(),
            status: status.into(),
        };
        block_on(LocalServerRenderer::<StatusBadge>::with_props(props).render())
    }

    #[test]
    fn badge_class_follows_tier() {
        assert!(render("Kritis").contains("badge badge-danger"));
        assert!(render("Rentan").contains("badge badge-warning"));
        assert!(render("Aman").contains("badge badge-safe"));
    }
}
