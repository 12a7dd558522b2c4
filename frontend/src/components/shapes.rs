use yew::prelude::*;

use crate::components::in_view::{use_in_view, ViewOptions};
use crate::config::{self, ShapeConfig};

#[derive(Properties, PartialEq)]
struct ShapeProps {
    shape: ShapeConfig,
}

#[function_component(Shape)]
fn shape(props: &ShapeProps) -> Html {
    let ShapeConfig { color, size, left, top, delay } = &props.shape;
    let style = format!(
        "left: {}; top: {}; width: {}px; height: {}px; background: {}; animation-delay: {:.1}s;",
        left, top, size, size, color, delay
    );

    html! { <div class="shape" style={style}></div> }
}

/// Fixed layer of faint squares behind the page content.
#[function_component(GeometricShapes)]
pub fn geometric_shapes() -> Html {
    let node = use_node_ref();
    let site = config::site();
    let in_view = use_in_view(
        node.clone(),
        ViewOptions::tracking(site.animation.shapes_threshold),
    );

    html! {
        <div ref={node} class="shapes-layer">
            {
                if in_view {
                    html! {
                        <>
                            { for site.shapes.iter().map(|shape| html! { <Shape shape={shape.clone()} /> }) }
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlurElementProps {
    pub class: AttrValue,
}

#[function_component(BlurElement)]
pub fn blur_element(props: &BlurElementProps) -> Html {
    html! { <div class={classes!("blur-blob", props.class.to_string())}></div> }
}
