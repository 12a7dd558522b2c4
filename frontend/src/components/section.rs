use yew::prelude::*;

use crate::components::in_view::{use_in_view, ViewOptions};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Full-height page section that slides up into place while on screen.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let node = use_node_ref();
    let threshold = config::site().animation.section_threshold;
    let in_view = use_in_view(node.clone(), ViewOptions::tracking(threshold));

    html! {
        <section
            id={props.id.clone()}
            ref={node}
            class={classes!("page-section", "reveal", in_view.then(|| "in-view"))}
        >
            { for props.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedTitleProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnimatedTitle)]
pub fn animated_title(props: &AnimatedTitleProps) -> Html {
    let node = use_node_ref();
    let threshold = config::site().animation.title_threshold;
    let in_view = use_in_view(node.clone(), ViewOptions::tracking(threshold));

    html! {
        <h2 ref={node} class={classes!("section-title", "reveal", "slow", in_view.then(|| "in-view"))}>
            { for props.children.iter() }
        </h2>
    }
}
