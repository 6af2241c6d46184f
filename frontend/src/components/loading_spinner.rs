use yew::prelude::*;

use crate::i18n::current::{common, loading_spinner as t};

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Small,
    Large,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Small => 24,
            SpinnerSize::Large => 56,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Small)]
    pub size: SpinnerSize,
    /// Centre the spinner in the viewport (used while the session loads).
    #[prop_or(false)]
    pub fullscreen: bool,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!("--spinner-size:{}px;", props.size.dimension());

    let spinner = html! {
        <div
            class={classes!("flex", "items-center", "justify-center", "p-6")}
            role="status"
            aria-live="polite"
            aria-busy="true"
            aria-label={t::ARIA_LABEL}
        >
            <div
                style={spinner_style}
                class={classes!(
                    "w-[var(--spinner-size)]",
                    "h-[var(--spinner-size)]",
                    "rounded-full",
                    "border-4",
                    "border-orange-200",
                    "border-t-orange-500",
                    "animate-spin"
                )}
            />
            <span class={classes!("sr-only")}>{ common::LOADING }</span>
        </div>
    };

    if props.fullscreen {
        html! {
            <div class={classes!("flex", "min-h-screen", "items-center", "justify-center")}>
                { spinner }
            </div>
        }
    } else {
        spinner
    }
}
