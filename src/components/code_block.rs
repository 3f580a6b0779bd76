use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::settings::get_settings;

#[derive(Properties, PartialEq)]
pub struct CodeBlockProps {
    pub code: String,
    #[prop_or_default]
    pub caption: Option<String>,
}

/// Code snippet with per-line spans and a clipboard copy button.
///
/// The button label flips to "Copied" on success and reverts after the
/// configured delay. Clipboard failures are logged, never surfaced.
#[function_component(CodeBlock)]
pub fn code_block(props: &CodeBlockProps) -> Html {
    let copied = use_state(|| false);
    let raw = trim_snippet(&props.code);

    let onclick = {
        let copied = copied.clone();
        let raw = raw.clone();
        Callback::from(move |_| {
            let copied = copied.clone();
            let text = raw.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let promise = window.navigator().clipboard().write_text(&text);
                match wasm_bindgen_futures::JsFuture::from(promise).await {
                    Ok(_) => {
                        copied.set(true);
                        let copied = copied.clone();
                        Timeout::new(get_settings().copied_reset_ms, move || {
                            copied.set(false);
                        })
                        .forget();
                    }
                    Err(err) => log::warn!("clipboard write failed: {err:?}"),
                }
            });
        })
    };

    html! {
        <div class="code-block">
            <pre>
                <code>
                    { for raw.lines().map(|line| html! { <><span>{line}</span>{"\n"}</> }) }
                </code>
            </pre>
            <button
                class={classes!("copy-btn", (*copied).then_some("success"))}
                type="button"
                {onclick}
            >
                { if *copied { "Copied" } else { "Copy" } }
            </button>
            {if let Some(caption) = &props.caption {
                html! { <p class="code-caption">{caption}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}

/// Strip the leading newline of an indented literal and any trailing
/// whitespace, keeping interior blank lines.
fn trim_snippet(raw: &str) -> String {
    raw.strip_prefix('\n').unwrap_or(raw).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_snippet_strips_edges_only() {
        assert_eq!(trim_snippet("\nlet x = 1;\n  \n"), "let x = 1;");
        assert_eq!(trim_snippet("a\n\nb\n"), "a\n\nb");
        assert_eq!(trim_snippet("plain"), "plain");
    }
}
