/// Popup UI for the quote token extension

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use patternfly_yew::prelude::*;
use crate::config::PopupConfig;
use crate::controller::PopupController;
use crate::host::ChromeHost;
use crate::http::FetchClient;
use crate::token::TokenKind;
use crate::ui::components::{CopyButton, TriggerButton};

type ChromePopup = PopupController<ChromeHost, FetchClient>;

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: PopupConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let force_update = use_force_update();

    // One controller per popup session; every state change schedules a re-render
    let controller = {
        let config = props.config.clone();
        let force_update = force_update.clone();
        use_memo((), move |_| {
            ChromePopup::new(ChromeHost, FetchClient, config)
                .with_observer(move || force_update.force_update())
        })
    };

    // Pre-fill the quote id from the active tab on mount
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                controller.open().await;
            });
            || ()
        });
    }

    let on_generate = {
        let controller = controller.clone();
        move |kind: TokenKind| {
            let controller = controller.clone();
            Callback::from(move |_: MouseEvent| {
                let controller = controller.clone();
                spawn_local(async move {
                    controller.generate(kind).await;
                });
            })
        }
    };

    let on_copy = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.copy().await;
            });
        })
    };

    let on_quote_input = {
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                controller.set_quote_id(input.value());
            }
        })
    };

    let on_dismiss_error = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.dismiss_error())
    };

    let view = controller.view();

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Quote Token"}</h1>

            <div class="flex-column-gap">
                <label class="pf-v5-c-form__label" for="quoteId">
                    <span class="pf-v5-c-form__label-text">{"Quote ID"}</span>
                </label>
                <input
                    id="quoteId"
                    class="pf-v5-c-form-control"
                    type="text"
                    inputmode="numeric"
                    placeholder="e.g. 12345"
                    value={view.quote_id.clone()}
                    oninput={on_quote_input}
                />

                <TriggerButton
                    kind={TokenKind::Standard}
                    state={view.standard}
                    onclick={on_generate(TokenKind::Standard)}
                />
                <TriggerButton
                    kind={TokenKind::FullForm}
                    state={view.full_form}
                    onclick={on_generate(TokenKind::FullForm)}
                />
            </div>

            // Error panel: one message, always the latest attempt's
            if let Some(err) = view.error.clone() {
                <div class="message-top-margin">
                    <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                        <div class="error-message">
                            <span>{err}</span>
                            <button class="pf-v5-c-button pf-m-plain" aria-label="Dismiss" onclick={on_dismiss_error}>
                                {"×"}
                            </button>
                        </div>
                    </Alert>
                </div>
            }

            <div class="result-row message-top-margin">
                <input
                    id="result"
                    class="pf-v5-c-form-control"
                    type="text"
                    readonly=true
                    value={view.result.clone()}
                />
                <CopyButton copied={view.copied} onclick={on_copy} />
            </div>

            <p class="footer-popup">
                {format!("Quote Token v{}", env!("CARGO_PKG_VERSION"))}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_props_default_to_production_config() {
        // Renderer::<App>::new() builds its props through Default
        let props = AppProps::default();
        assert_eq!(props.config, PopupConfig::default());
    }
}
