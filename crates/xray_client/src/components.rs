//! Ready-to-use components for the companion page.

use leptos::prelude::*;

/// Question/answer overlay anchored at the bottom-left of the page.
///
/// Invisible while `question` is empty. Shows "Esperando respuesta..." until a
/// response arrives.
///
/// # Example
///
/// ```rust,ignore
/// let question = RwSignal::new(String::from("¿Cuántos huesos tiene la mano?"));
/// let response = RwSignal::new(String::new());
///
/// view! { <QuestionModal question=question response=response /> }
/// ```
#[component]
pub fn QuestionModal(
    #[prop(into)] question: Signal<String>,
    #[prop(into)] response: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="absolute bottom-14 left-14 max-w-60">
            <div class=move || {
                format!(
                    "text-white p-4 bg-gray-800 border rounded border-gray-700 min-w-[30vw] shadow-xl shadow-black/70 transition-opacity {}",
                    if question.with(String::is_empty) { "opacity-0" } else { "opacity-100" },
                )
            }>
                <h2 class="mb-1 text-xl font-bold pb-2">
                    "Pregunta realizada: " {question}
                </h2>
                <p class="text-gray-400">{move || response_text(&response.get())}</p>
            </div>
        </div>
    }
}

/// What the overlay prints under the question.
pub fn response_text(response: &str) -> String {
    if response.is_empty() {
        "Esperando respuesta...".to_string()
    } else {
        response.to_string()
    }
}

/// A piece of [`WaveText`].
#[derive(Clone, Debug, PartialEq)]
pub enum WaveToken {
    /// A run of whitespace, rendered as a fixed-width spacer.
    Space,
    /// A word; each letter carries its animation delay in seconds.
    Word(Vec<(char, f32)>),
}

/// Split `text` into words and whitespace runs. Letter `j` of token `i` is
/// delayed by `(i + j) * 0.1` seconds, so the wave rolls left to right.
pub fn wave_tokens(text: &str) -> Vec<WaveToken> {
    let mut runs: Vec<(bool, String)> = Vec::new();
    for c in text.chars() {
        let space = c.is_whitespace();
        match runs.last_mut() {
            Some((is_space, run)) if *is_space == space => run.push(c),
            _ => runs.push((space, c.to_string())),
        }
    }

    runs.into_iter()
        .enumerate()
        .map(|(word_index, (is_space, run))| {
            if is_space {
                WaveToken::Space
            } else {
                WaveToken::Word(
                    run.chars()
                        .enumerate()
                        .map(|(letter_index, c)| (c, (word_index + letter_index) as f32 * 0.1))
                        .collect(),
                )
            }
        })
        .collect()
}

/// Text whose letters bob up and down one after another.
///
/// Needs a `wave` keyframes rule in the page stylesheet.
#[component]
pub fn WaveText(
    #[prop(into)] text: String,
    #[prop(optional)] class: Option<&'static str>,
) -> impl IntoView {
    let tokens = wave_tokens(&text);

    view! {
        <div class=format!("wave-text {}", class.unwrap_or(""))>
            {tokens
                .into_iter()
                .map(|token| match token {
                    WaveToken::Space => {
                        view! {
                            <span style="display: inline-block; width: 0.25em">" "</span>
                        }
                            .into_any()
                    }
                    WaveToken::Word(letters) => {
                        view! {
                            <span style="display: inline-block">
                                {letters
                                    .into_iter()
                                    .map(|(letter, delay)| {
                                        view! {
                                            <span style=format!(
                                                "display: inline-block; animation: wave 1.5s infinite; animation-delay: {:.1}s",
                                                delay,
                                            )>{letter.to_string()}</span>
                                        }
                                    })
                                    .collect_view()}
                            </span>
                        }
                            .into_any()
                    }
                })
                .collect_view()}
        </div>
    }
}
