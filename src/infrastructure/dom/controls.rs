use leptos::*;
use strum::IntoEnumIterator;
use web_sys::{Element, HtmlElement};

use super::surface::{CONTROLS_CLASS, find_child_with_class};
use crate::domain::viewport::ControlCommand;

const CLUSTER_STYLE: &str = "position: absolute; top: 10px; right: 10px; z-index: 100; \
    display: flex; gap: 5px; background-color: rgba(255, 255, 255, 0.8); padding: 5px; \
    border-radius: 4px; box-shadow: 0 2px 5px rgba(0, 0, 0, 0.1);";

const BUTTON_STYLE: &str = "width: 30px; height: 30px; cursor: pointer; border-radius: 3px; \
    background-color: #fff; border: 1px solid #ddd; font-size: 16px; font-weight: bold;";

/// 🔍 Zoom control cluster: one button per [`ControlCommand`]
#[component]
pub fn ZoomControls(on_command: Callback<ControlCommand>) -> impl IntoView {
    view! {
        <div class=CONTROLS_CLASS style=CLUSTER_STYLE>
            {ControlCommand::iter()
                .map(move |command| {
                    let on_command = on_command.clone();
                    view! {
                        <button
                            type="button"
                            title=command.to_string()
                            data-command=command.name()
                            style=BUTTON_STYLE
                            on:click=move |_| on_command.call(command)
                        >
                            {command.glyph()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Mount [`ZoomControls`] into `container` and return the rendered cluster.
///
/// Returns `None` when the container already has a control cluster; in that
/// case the existing one is left to whoever created it.
pub fn mount_controls(container: &HtmlElement, on_command: Callback<ControlCommand>) -> Option<Element> {
    if find_child_with_class(container, CONTROLS_CLASS).is_some() {
        return None;
    }
    mount_to(container.clone(), move || view! { <ZoomControls on_command=on_command/> });
    find_child_with_class(container, CONTROLS_CLASS)
}
