use crate::core::store::Toast;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub(crate) toasts: Vec<Toast>,
    pub(crate) on_dismiss: Callback<u64>,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let handles: Vec<Timeout> = list
                    .iter()
                    .map(|toast| {
                        let on_dismiss = on_dismiss.clone();
                        let id = toast.id;
                        Timeout::new(4000, move || on_dismiss.emit(id))
                    })
                    .collect();
                move || drop(handles)
            },
            props.toasts.clone(),
        );
    }

    let dismiss_label = bundle.text("toast.dismiss", "Dismiss");
    html! {
        <div class="toast toast-end" aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| {
                let id = toast.id;
                let on_close = {
                    let on_dismiss = props.on_dismiss.clone();
                    Callback::from(move |_| on_dismiss.emit(id))
                };
                html! {
                    <div class="alert alert-success" role="status">
                        <span>{toast.message.clone()}</span>
                        <button class="btn btn-ghost btn-xs" aria-label={dismiss_label.clone()} onclick={on_close}>{"✕"}</button>
                    </div>
                }
            })}
        </div>
    }
}
