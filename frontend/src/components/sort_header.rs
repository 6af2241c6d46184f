use pizzafy_shared::{SortDirection, SortField};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SortHeaderProps {
    pub field: SortField,
    pub label: AttrValue,
    /// Current sort column and direction of the table.
    pub active: (SortField, SortDirection),
    pub on_toggle: Callback<SortField>,
}

/// Clickable column header; shows the direction arrow on the active column.
#[function_component(SortHeader)]
pub fn sort_header(props: &SortHeaderProps) -> Html {
    let (active_field, direction) = props.active;
    let is_active = active_field == props.field;
    let onclick = {
        let field = props.field;
        props.on_toggle.reform(move |_: MouseEvent| field)
    };
    let (arrow, aria_sort) = match (is_active, direction) {
        (false, _) => ("", "none"),
        (true, SortDirection::Ascending) => (" ▲", "ascending"),
        (true, SortDirection::Descending) => (" ▼", "descending"),
    };

    html! {
        <th scope="col" aria-sort={aria_sort} class="px-4 py-3 text-left">
            <button
                type="button"
                class={classes!(
                    "font-semibold",
                    "hover:text-orange-600",
                    is_active.then_some("text-orange-600")
                )}
                {onclick}
            >
                { props.label.clone() }{ arrow }
            </button>
        </th>
    }
}
