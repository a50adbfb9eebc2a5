use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::motion::in_view;

pub fn element_in_view(node: &NodeRef) -> bool {
    let Some(element) = node.cast::<Element>() else {
        return false;
    };
    let Some(viewport_height) = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
    else {
        return false;
    };
    let rect = element.get_bounding_client_rect();
    in_view(rect.top(), rect.bottom(), viewport_height, config::VIEW_MARGIN)
}

/// Becomes `true` the first time `node` scrolls into view and stays there.
#[hook]
pub fn use_seen_once(node: NodeRef) -> bool {
    let seen = use_state(|| false);

    {
        let was_seen = *seen;
        let seen = seen.clone();
        use_effect_with_deps(
            move |already_seen| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) if !*already_seen => {
                        if element_in_view(&node) {
                            seen.set(true);
                            Box::new(|| ())
                        } else {
                            let callback = Closure::<dyn Fn()>::new(move || {
                                if element_in_view(&node) {
                                    seen.set(true);
                                }
                            });
                            let _ = window.add_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                            Box::new(move || {
                                let _ = window.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                );
                            })
                        }
                    }
                    _ => Box::new(|| ()),
                };
                destructor
            },
            was_seen,
        );
    }

    *seen
}

pub fn reveal_classes(base: Classes, seen: bool) -> Classes {
    classes!(base, seen.then(|| "visible"))
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that gains the `visible` class once it has scrolled into view,
/// so CSS entrance animations only start when the user can see them.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let seen = use_seen_once(node.clone());

    html! {
        <div ref={node} class={reveal_classes(props.class.clone(), seen)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_class_added_once_seen() {
        let hidden = reveal_classes(classes!("about-banner"), false);
        assert!(hidden.contains("about-banner"));
        assert!(!hidden.contains("visible"));

        let shown = reveal_classes(classes!("about-banner"), true);
        assert!(shown.contains("about-banner"));
        assert!(shown.contains("visible"));
    }
}
