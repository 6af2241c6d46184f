use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::error_banner as t;

const AUTO_DISMISS_MS: u32 = 5000;

/// Dismissible alert. Load failures stay until closed; transient errors pass
/// `auto_dismiss` and hide themselves.
#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    /// Called once when the banner hides, by click or timeout.
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(false)]
    pub auto_dismiss: bool,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let dismissed = use_state(|| false);

    let close = {
        let dismissed = dismissed.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |()| {
            if *dismissed {
                return;
            }
            dismissed.set(true);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let timeout = {
        let close = close.clone();
        use_timeout(move || close.emit(()), AUTO_DISMISS_MS)
    };

    // A new message reopens the banner and restarts its timer.
    {
        let dismissed = dismissed.clone();
        use_effect_with((props.message.clone(), props.auto_dismiss), move |(_, auto_dismiss)| {
            dismissed.set(false);
            if *auto_dismiss {
                timeout.reset();
            } else {
                timeout.cancel();
            }
        });
    }

    if *dismissed || props.message.trim().is_empty() {
        return Html::default();
    }

    html! {
        <div
            class={classes!(
                "error-banner",
                "mb-4",
                "flex",
                "max-w-2xl",
                "items-start",
                "gap-3",
                "rounded-xl",
                "bg-red-50",
                "px-5",
                "py-4",
                "text-sm",
                "text-red-800"
            )}
            role="alert"
            aria-live="assertive"
        >
            <div class="flex-1 space-y-1">
                <p class="font-semibold">{ t::TITLE }</p>
                <p>{ props.message.clone() }</p>
            </div>
            <button
                type="button"
                class="h-8 w-8 rounded-full text-lg hover:bg-red-100"
                aria-label={t::CLOSE_ARIA}
                onclick={close.reform(|_: MouseEvent| ())}
            >
                {"×"}
            </button>
        </div>
    }
}
