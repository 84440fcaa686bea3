//! Formatted message text renderer.

use dioxus::prelude::*;
use parlor_media::{FormattedText, SpanKind, TextSpan};

/// Renders formatted text spans inline.
#[component]
pub fn FormattedTextView(text: FormattedText) -> Element {
    rsx! {
        {text.spans.iter().enumerate().map(|(index, span)| render_span(index, span))}
    }
}

fn render_span(index: usize, span: &TextSpan) -> Element {
    let content = &span.text;
    match &span.kind {
        SpanKind::Plain => rsx! { span { key: "{index}", "{content}" } },
        SpanKind::Bold => rsx! { strong { key: "{index}", "{content}" } },
        SpanKind::Italic => rsx! { em { key: "{index}", "{content}" } },
        SpanKind::Underline => rsx! { u { key: "{index}", "{content}" } },
        SpanKind::Strikethrough => rsx! { s { key: "{index}", "{content}" } },
        SpanKind::Code => rsx! { code { key: "{index}", class: "text-code", "{content}" } },
        SpanKind::Pre { language } => {
            let class = language_class(language.as_deref());
            rsx! {
                pre { key: "{index}", class: "text-pre",
                    code { class: "{class}", "{content}" }
                }
            }
        }
        SpanKind::Link { href } => rsx! {
            a {
                key: "{index}",
                class: "text-url",
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                // Don't treat link clicks as media activation
                onclick: move |evt| evt.stop_propagation(),
                "{content}"
            }
        },
        SpanKind::Highlight => rsx! { span { key: "{index}", class: "text-highlight", "{content}" } },
    }
}

fn language_class(language: Option<&str>) -> String {
    match language {
        Some(lang) if !lang.is_empty() => format!("language-{}", lang),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_class() {
        assert_eq!(language_class(Some("rust")), "language-rust");
        assert_eq!(language_class(Some("")), "");
        assert_eq!(language_class(None), "");
    }
}
