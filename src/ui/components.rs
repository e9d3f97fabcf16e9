/// Reusable UI components

use yew::prelude::*;
use patternfly_yew::prelude::*;
use crate::controller::TriggerState;
use crate::token::TokenKind;

#[derive(Properties, PartialEq)]
pub struct SpinGlyphProps {
    #[prop_or_default]
    pub label: Option<String>,
}

/// Small spinning glyph shown in place of a trigger's icon while it is busy
#[function_component(SpinGlyph)]
pub fn spin_glyph(props: &SpinGlyphProps) -> Html {
    html! {
        <span
            class="loading-spinner spin"
            role="status"
            aria-label={props.label.clone().unwrap_or_else(|| "Loading".to_string())}
        ></span>
    }
}

#[derive(Properties, PartialEq)]
pub struct TriggerButtonProps {
    pub kind: TokenKind,
    pub state: TriggerState,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(TriggerButton)]
pub fn trigger_button(props: &TriggerButtonProps) -> Html {
    let variant = match props.kind {
        TokenKind::Standard => ButtonVariant::Primary,
        TokenKind::FullForm => ButtonVariant::Secondary,
    };

    let glyph = match props.state {
        TriggerState::Busy => html! { <SpinGlyph /> },
        TriggerState::Idle | TriggerState::Disabled => html! {
            <span class="trigger-glyph">{"🔗"}</span>
        },
    };

    html! {
        <Button
            onclick={props.onclick.clone()}
            disabled={props.state != TriggerState::Idle}
            variant={variant}
            block={true}
        >
            <span class="trigger-content">
                {glyph}
                <span class="trigger-label">{props.kind.label()}</span>
            </span>
        </Button>
    }
}

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub copied: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    html! {
        <Button onclick={props.onclick.clone()} variant={ButtonVariant::Secondary}>
            {if props.copied { "✅ Copied" } else { "📋 Copy URL" }}
        </Button>
    }
}
